use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use shelf_catalog::{Catalog, Record};
use shelf_config::DataFiles;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::instrument;

/// Entity counts after a full load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub books: usize,
    pub authors: usize,
    pub tags: usize,
    pub book_tags: usize,
}

fn ingest<R, F>(reader: R, mut add: F) -> Result<()>
where
    R: Read,
    F: FnMut(Record) -> shelf_catalog::error::Result<()>,
{
    // Not `flexible`: a row with a different field count than the header is an error.
    let mut csv = csv::Reader::from_reader(reader);
    for (index, row) in csv.deserialize::<Record>().enumerate() {
        let record = row.or_raise(|| ErrorKind::Csv)?;
        add(record).or_raise(|| ErrorKind::Ingest(index + 1))?;
    }
    Ok(())
}

fn open(path: &Path) -> Result<File> {
    File::open(path).or_raise(|| ErrorKind::Io(path.to_path_buf()))
}

/// Loads book rows, linking every listed author.
///
/// Returns the catalog's `(book_size, author_size)` afterwards.
#[instrument(skip_all)]
pub fn load_books<R: Read>(catalog: &mut Catalog, reader: R) -> Result<(usize, usize)> {
    ingest(reader, |record| catalog.add_book(record).map(|_| ()))?;
    tracing::info!(books = catalog.book_size(), authors = catalog.author_size(), "Loaded books");
    Ok((catalog.book_size(), catalog.author_size()))
}

/// Loads tag rows. Returns the catalog's `tag_size` afterwards.
#[instrument(skip_all)]
pub fn load_tags<R: Read>(catalog: &mut Catalog, reader: R) -> Result<usize> {
    ingest(reader, |record| catalog.add_tag(&record))?;
    tracing::info!(tags = catalog.tag_size(), "Loaded tags");
    Ok(catalog.tag_size())
}

/// Loads book-tag rows. Returns the catalog's `book_tag_size` afterwards.
#[instrument(skip_all)]
pub fn load_book_tags<R: Read>(catalog: &mut Catalog, reader: R) -> Result<usize> {
    ingest(reader, |record| catalog.add_book_tag(&record))?;
    tracing::info!(book_tags = catalog.book_tag_size(), "Loaded book tags");
    Ok(catalog.book_tag_size())
}

#[instrument(skip(catalog))]
pub fn load_books_file(catalog: &mut Catalog, path: &Path) -> Result<(usize, usize)> {
    load_books(catalog, open(path)?)
}

#[instrument(skip(catalog))]
pub fn load_tags_file(catalog: &mut Catalog, path: &Path) -> Result<usize> {
    load_tags(catalog, open(path)?)
}

#[instrument(skip(catalog))]
pub fn load_book_tags_file(catalog: &mut Catalog, path: &Path) -> Result<usize> {
    load_book_tags(catalog, open(path)?)
}

/// Loads books, then tags, then book-tag links from the configured files.
#[instrument(skip(catalog))]
pub fn load_data(catalog: &mut Catalog, files: &DataFiles) -> Result<LoadSummary> {
    let (books, authors) = load_books_file(catalog, &files.books_path())?;
    let tags = load_tags_file(catalog, &files.tags_path())?;
    let book_tags = load_book_tags_file(catalog, &files.book_tags_path())?;
    Ok(LoadSummary { books, authors, tags, book_tags })
}
