//! Field names expected in ingested records.

/// Book: comma-separated author names.
pub const AUTHORS: &str = "authors";
/// Book: decimal rating, parsed only when compared.
pub const AVERAGE_RATING: &str = "average_rating";
/// Book: display title.
pub const TITLE: &str = "title";
/// Tag: human-readable tag name.
pub const TAG_NAME: &str = "tag_name";
/// Tag and book-tag: opaque tag identifier.
pub const TAG_ID: &str = "tag_id";
/// Book-tag: opaque external book identifier.
pub const GOODREADS_BOOK_ID: &str = "goodreads_book_id";
