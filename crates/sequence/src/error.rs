//! Sequence Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A sequence error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for sequence operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A 1-based position (or an exclusive range end) fell outside the sequence.
    #[display("position {position} out of range for sequence of size {size}")]
    OutOfRange {
        /// The requested position.
        position: usize,
        /// The size of the sequence at the time of the request.
        size: usize,
    },
    /// The operation needs at least one element.
    #[display("sequence is empty")]
    Empty,
    /// Iteration cannot advance by zero.
    #[display("iteration stride must be greater than zero")]
    InvalidStride,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // Sequences are in-memory; the same call will fail the same way.
        false
    }
}
