//! Library Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// A library error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// A source file could not be opened.
    #[display("could not open {}", _0.display())]
    Io(#[error(not(source))] PathBuf),
    /// A row could not be read as CSV.
    #[display("malformed CSV")]
    Csv,
    /// A well-formed row was rejected by the catalog (1-based data row,
    /// header excluded).
    #[display("could not ingest row {_0}")]
    Ingest(#[error(not(source))] usize),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
