//! In-memory catalog of books, authors, tags and book-tag links.
//!
//! The catalog is built incrementally from string-keyed [`Record`]s (one per
//! source row) and then queried. It has no knowledge of where records come
//! from; see `shelf-library` for CSV loading.
//!
//! # Architecture
//! Four append-only [`Sequence`]s:
//! - **books**: every book record, verbatim. The single owner of book data.
//! - **authors**: one per case-insensitively distinct name, each holding
//!   [`BookId`] back-references into **books**.
//! - **tags** and **book_tags**: stored as given, duplicates included.
//!
//! ```
//! use shelf_catalog::{Catalog, Record};
//!
//! let mut catalog = Catalog::new();
//! let record = Record::from([
//!     ("title".to_string(), "Good Omens".to_string()),
//!     ("authors".to_string(), "Terry Pratchett, Neil Gaiman".to_string()),
//!     ("average_rating".to_string(), "4.25".to_string()),
//! ]);
//! catalog.add_book(record).unwrap();
//! assert_eq!(catalog.author_size(), 2);
//! let author = catalog.books_by_author("neil gaiman").unwrap();
//! assert_eq!(author.books.size(), 1);
//! ```

mod compare;
pub mod consts;
pub mod error;
mod ingest;
pub mod models;
mod query;

pub use crate::compare::{compare_authors, compare_ratings, compare_tag_names};
pub use crate::models::{Author, Book, BookId, BookTag, Record, Tag};
pub use shelf_sequence::Sequence;

use crate::error::{ErrorKind, Result};
use exn::ResultExt;

/// Aggregate root owning every entity.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Sequence<Book>,
    authors: Sequence<Author>,
    tags: Sequence<Tag>,
    book_tags: Sequence<BookTag>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn books(&self) -> &Sequence<Book> {
        &self.books
    }

    pub fn authors(&self) -> &Sequence<Author> {
        &self.authors
    }

    pub fn tags(&self) -> &Sequence<Tag> {
        &self.tags
    }

    pub fn book_tags(&self) -> &Sequence<BookTag> {
        &self.book_tags
    }

    pub fn book_size(&self) -> usize {
        self.books.size()
    }

    pub fn author_size(&self) -> usize {
        self.authors.size()
    }

    pub fn tag_size(&self) -> usize {
        self.tags.size()
    }

    pub fn book_tag_size(&self) -> usize {
        self.book_tags.size()
    }

    /// Resolves a back-reference.
    pub fn book(&self, id: BookId) -> Result<&Book> {
        self.books.get_element(id.position()).or_raise(|| ErrorKind::DanglingReference(id))
    }

    /// Resolves every book credited to `author`, in ingestion order.
    pub fn author_books<'a>(&'a self, author: &'a Author) -> impl Iterator<Item = Result<&'a Book>> + 'a {
        author.books.iter().map(|id| self.book(*id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_catalog_is_empty() {
        let catalog = Catalog::new();
        assert_eq!(catalog.book_size(), 0);
        assert_eq!(catalog.author_size(), 0);
        assert_eq!(catalog.tag_size(), 0);
        assert_eq!(catalog.book_tag_size(), 0);
    }

    #[test]
    fn constructors_have_defaults() {
        let author = Author::new("Octavia E. Butler");
        assert_eq!(author.name, "Octavia E. Butler");
        assert!(author.books.is_empty());
        assert_eq!(author.average_rating, 0.0);
        assert_eq!(Tag::new("scifi", "5"), Tag { name: "scifi".into(), tag_id: "5".into() });
        assert_eq!(BookTag::new("5", "42"), BookTag { tag_id: "5".into(), book_id: "42".into() });
    }

    #[test]
    fn every_back_reference_resolves() {
        let mut catalog = Catalog::new();
        for authors in ["A, B", "b, C", "a"] {
            let record = Record::from([("authors".to_string(), authors.to_string())]);
            catalog.add_book(record).unwrap();
        }
        for author in catalog.authors() {
            assert!(catalog.author_books(author).all(|book| book.is_ok()));
        }
        assert_eq!(catalog.author_size(), 3);
    }

    #[test]
    fn book_rejects_foreign_id() {
        let catalog = Catalog::new();
        let err = catalog.book(BookId::new(3)).unwrap_err();
        assert_eq!(*err, ErrorKind::DanglingReference(BookId::new(3)));
    }
}
