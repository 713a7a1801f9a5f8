/// A label that can be applied to books.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    /// Tag text
    pub name: String,
    /// Opaque identifier, referenced by [`BookTag::tag_id`]
    pub tag_id: String,
}
impl Tag {
    pub fn new(name: impl Into<String>, tag_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag_id: tag_id.into(),
        }
    }
}

/// Association between a tag and an external book identifier.
///
/// Neither id is resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookTag {
    pub tag_id: String,
    pub book_id: String,
}
impl BookTag {
    pub fn new(tag_id: impl Into<String>, book_id: impl Into<String>) -> Self {
        Self {
            tag_id: tag_id.into(),
            book_id: book_id.into(),
        }
    }
}
