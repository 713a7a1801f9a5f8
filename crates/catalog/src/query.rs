//! Catalog queries. All of them are linear scans.

use crate::Catalog;
use crate::compare::{compare_authors, compare_ratings, compare_tag_names};
use crate::error::{ErrorKind, Result};
use crate::models::{Author, Book};
use exn::ResultExt;
use std::cmp::Ordering;
use tracing::instrument;

impl Catalog {
    /// Finds an author by name, ignoring case.
    ///
    /// The returned [`Author`] carries the back-references to their books;
    /// resolve them with [`author_books`](Self::author_books).
    #[instrument(skip(self))]
    pub fn books_by_author(&self, author_name: &str) -> Option<&Author> {
        let position = self.authors.is_present(author_name, compare_authors)?;
        self.authors.get_element(position).ok()
    }

    /// The book with the highest average rating.
    ///
    /// Ties go to the book ingested first.
    ///
    /// # Errors
    /// - [`ErrorKind::Empty`] if no books have been ingested.
    /// - [`ErrorKind::ParseError`] (or `MissingField`) as soon as a book with
    ///   an unusable rating is compared.
    #[instrument(skip(self), fields(books = self.books.size()))]
    pub fn best_book(&self) -> Result<&Book> {
        let mut best = self.books.first_element().or_raise(|| ErrorKind::Empty("books"))?;
        for book in self.books.iterator(0, self.books.size(), 1).or_raise(|| ErrorKind::Sequence)? {
            if compare_ratings(book, best)? {
                best = book;
            }
        }
        Ok(best)
    }

    /// Number of book-tag links carrying exactly `tag` as their tag id.
    #[instrument(skip(self))]
    pub fn count_books_by_tag(&self, tag: &str) -> usize {
        self.book_tags.iter().filter(|link| compare_tag_names(tag, link) == Ordering::Equal).count()
    }
}
