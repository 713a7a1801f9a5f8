//! Catalog Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use crate::models::BookId;
use derive_more::{Display, Error};

/// A catalog error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The query needs at least one entry in the named collection.
    #[display("no {_0} in catalog")]
    Empty(#[error(not(source))] &'static str),
    /// A record handed to ingestion lacks a required field.
    #[display("missing required field: {_0}")]
    MissingField(#[error(not(source))] &'static str),
    /// A field was found but could not be parsed.
    #[display("failed to parse field '{field}', found value: {value}")]
    ParseError {
        /// The field that failed to parse.
        field: &'static str,
        /// The raw value found in the record.
        value: String,
    },
    /// A book reference does not point into the catalog's books.
    #[display("book {_0} is not in the catalog")]
    DanglingReference(#[error(not(source))] BookId),
    /// Failure inside the underlying sequence.
    #[display("sequence error")]
    Sequence,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // Everything is in memory; retrying the same record gives the same result.
        false
    }
}
