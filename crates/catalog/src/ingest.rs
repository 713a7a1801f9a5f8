//! Record ingestion.
//!
//! Each function takes one source record and appends to the catalog. A record
//! missing a required field is rejected before anything is appended.

use crate::compare::compare_authors;
use crate::consts;
use crate::error::{ErrorKind, Result};
use crate::models::{Author, BookId, BookTag, Record, Tag};
use crate::Catalog;
use exn::{OptionExt, ResultExt};
use tracing::instrument;

fn required<'a>(record: &'a Record, field: &'static str) -> Result<&'a str> {
    record.get(field).map(String::as_str).ok_or_raise(|| ErrorKind::MissingField(field))
}

impl Catalog {
    /// Stores a book record verbatim and links it to each of its authors.
    ///
    /// The `authors` field is split on `,` and each name trimmed. The rating
    /// is not validated here.
    #[instrument(level = "trace", skip_all)]
    pub fn add_book(&mut self, record: Record) -> Result<BookId> {
        let authors = required(&record, consts::AUTHORS)?.to_string();
        let book = BookId::new(self.books.add_last(record.into()));
        for name in authors.split(',') {
            self.add_book_author(name.trim(), book)?;
        }
        Ok(book)
    }

    /// Appends `book` to the books of the author called `author_name`
    /// (case-insensitive), creating the author on first sight.
    #[instrument(level = "trace", skip(self))]
    pub fn add_book_author(&mut self, author_name: &str, book: BookId) -> Result<()> {
        if book.position() == 0 || book.position() > self.books.size() {
            exn::bail!(ErrorKind::DanglingReference(book));
        }
        let position = match self.authors.is_present(author_name, compare_authors) {
            Some(position) => position,
            None => {
                tracing::debug!(author = author_name, "New author");
                self.authors.add_last(Author::new(author_name))
            },
        };
        let author = self.authors.get_element_mut(position).or_raise(|| ErrorKind::Sequence)?;
        author.books.add_last(book);
        Ok(())
    }

    /// Appends a tag. Duplicate names or ids are kept.
    #[instrument(level = "trace", skip_all)]
    pub fn add_tag(&mut self, record: &Record) -> Result<()> {
        let tag = Tag::new(required(record, consts::TAG_NAME)?, required(record, consts::TAG_ID)?);
        self.tags.add_last(tag);
        Ok(())
    }

    /// Appends a book-tag link. Neither id is checked against the catalog.
    #[instrument(level = "trace", skip_all)]
    pub fn add_book_tag(&mut self, record: &Record) -> Result<()> {
        let link = BookTag::new(required(record, consts::TAG_ID)?, required(record, consts::GOODREADS_BOOK_ID)?);
        self.book_tags.add_last(link);
        Ok(())
    }
}
