//! Search queries as ordered bundles of book tags.

use crate::tag::BookTag;

/// An ordered collection of validated [`BookTag`]s forming one query.
///
/// Insertion order is preserved and several tags of the same kind may be
/// present; each one is scored on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagBundle {
    tags: Vec<BookTag>,
}

impl TagBundle {
    /// Create an empty bundle.
    #[must_use]
    pub fn new() -> Self {
        TagBundle { tags: Vec::new() }
    }

    /// Append a tag.
    pub fn push(&mut self, tag: BookTag) {
        self.tags.push(tag);
    }

    /// Number of tags in the bundle.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether the bundle has no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Tag at `index`, in insertion order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&BookTag> {
        self.tags.get(index)
    }

    /// Iterate over the tags in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, BookTag> {
        self.tags.iter()
    }
}

impl FromIterator<BookTag> for TagBundle {
    fn from_iter<I: IntoIterator<Item = BookTag>>(iter: I) -> Self {
        TagBundle {
            tags: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TagBundle {
    type Item = &'a BookTag;
    type IntoIter = std::slice::Iter<'a, BookTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}
