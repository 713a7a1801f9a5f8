//! Loading GoodReads CSV exports into a [`Catalog`](shelf_catalog::Catalog).
//!
//! Every file is headed CSV. Rows become [`Record`](shelf_catalog::Record)s
//! keyed by column name and are handed to the catalog's ingestion functions
//! one at a time. The first bad row aborts the load; rows before it stay in
//! the catalog.

pub mod error;
mod load;

pub use crate::load::{
    LoadSummary, load_book_tags, load_book_tags_file, load_books, load_books_file, load_data, load_tags,
    load_tags_file,
};
