use super::BookId;
use shelf_sequence::Sequence;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// A person credited on one or more books.
///
/// Authors never own books: [`books`](Self::books) is a back-reference index
/// of positions in the catalog's book list, in the order the books were
/// ingested. Resolve them with [`Catalog::author_books`](crate::Catalog::author_books).
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    /// Name as first seen during ingestion (original casing).
    pub name: String,
    /// Books credited to this author.
    pub books: Sequence<BookId>,
    /// Declared for reporting but never computed during ingestion, so it
    /// stays at `0.0`.
    pub average_rating: f64,
}
impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            books: Sequence::new(),
            average_rating: 0.0,
        }
    }
}

impl Display for Author {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} ({} books)", self.name, self.books.size())
    }
}
