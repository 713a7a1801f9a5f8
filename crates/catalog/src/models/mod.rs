mod author;
mod book;
mod tag;

pub use self::author::Author;
pub use self::book::{Book, BookId};
pub use self::tag::{BookTag, Tag};

use std::collections::BTreeMap;

/// One row of source data: column name to raw string value.
pub type Record = BTreeMap<String, String>;
