//! Comparators used by the catalog's linear scans.
//!
//! The three-way results exist so these functions fit
//! [`Sequence::is_present`](shelf_sequence::Sequence::is_present). Entities
//! are stored in insertion order, so only [`Ordering::Equal`] is meaningful;
//! never use these to drive a binary search over catalog lists.

use crate::error::Result;
use crate::models::{Author, Book, BookTag};
use std::cmp::Ordering;

/// Case-insensitive comparison of a name against an author's name.
pub fn compare_authors(name: &str, author: &Author) -> Ordering {
    name.to_lowercase().cmp(&author.name.to_lowercase())
}

/// Exact comparison of a tag id against a book-tag link's tag id.
pub fn compare_tag_names(name: &str, book_tag: &BookTag) -> Ordering {
    name.cmp(book_tag.tag_id.as_str())
}

/// Returns `true` if `candidate` is rated strictly higher than `current`.
///
/// Both ratings are parsed on every call; a malformed rating on either side
/// is an error.
pub fn compare_ratings(candidate: &Book, current: &Book) -> Result<bool> {
    Ok(candidate.average_rating()? > current.average_rating()?)
}
