use super::Record;
use crate::consts;
use crate::error::{ErrorKind, Result};
use exn::{OptionExt, ResultExt};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Position of a [`Book`] within the catalog's book list (1-based).
///
/// Only the catalog hands these out, so a `BookId` obtained from it always
/// resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookId(usize);
impl BookId {
    pub(crate) fn new(position: usize) -> Self {
        Self(position)
    }

    pub fn position(&self) -> usize {
        self.0
    }
}
impl Display for BookId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "#{}", self.0)
    }
}

/// A book, kept exactly as it was ingested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    record: Record,
}
impl Book {
    pub fn title(&self) -> Option<&str> {
        self.field(consts::TITLE)
    }

    /// Raw, comma-separated author names.
    pub fn authors(&self) -> Option<&str> {
        self.field(consts::AUTHORS)
    }

    /// Any passthrough field from the source record.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.record.get(name).map(String::as_str)
    }

    /// Parses the average rating.
    ///
    /// Ratings are stored unparsed; a malformed value is only discovered here.
    pub fn average_rating(&self) -> Result<f64> {
        let raw = self.field(consts::AVERAGE_RATING).ok_or_raise(|| ErrorKind::MissingField(consts::AVERAGE_RATING))?;
        raw.trim().parse::<f64>().or_raise(|| ErrorKind::ParseError {
            field: consts::AVERAGE_RATING,
            value: raw.to_string(),
        })
    }

    pub fn record(&self) -> &Record {
        &self.record
    }
}
impl From<Record> for Book {
    fn from(record: Record) -> Self {
        Self { record }
    }
}
impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.title().unwrap_or("(untitled)"))?;
        if let Some(authors) = self.authors() {
            write!(f, " by {}", authors)?;
        }
        if let Some(rating) = self.field(consts::AVERAGE_RATING) {
            write!(f, " [{}]", rating)?;
        }
        Ok(())
    }
}
