//! The five fields of a book.
//!
//! Each field wraps the text it was set to. Validation turns that text into
//! a [`BookTag`], which is then what searches are matched against: a field
//! scores a search tag by asking its own tag whether it
//! [`matches`](BookTag::matches) the search tag.

use crate::define_book_field;
use crate::error::{CatalogError, Result};
use crate::grammar::RawTag;
use crate::tag::{BookTag, Tag};

/// Contract shared by every book field.
pub trait BookField {
    /// Registry name of the tag this field holds.
    const TAG: &'static str;

    /// Store new text, whitespace-normalized. The field becomes unvalidated.
    fn set(&mut self, raw: &str);

    /// Validate the stored text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] if the text is empty or not a
    /// valid value for this field. The field stays unvalidated.
    fn validate(&mut self) -> Result<()>;

    /// The stored text.
    fn as_str(&self) -> &str;

    /// The validated value, or `None` while unvalidated.
    fn value(&self) -> Option<&BookTag>;

    /// Whether the last validation succeeded and nothing was set since.
    fn is_valid(&self) -> bool {
        self.value().is_some()
    }

    /// Score a search tag against this field: 1 if it matches, else 0.
    ///
    /// Unvalidated fields and tags of other kinds score 0.
    fn score(&self, search: &BookTag) -> u32 {
        self.value()
            .map_or(0, |value| u32::from(value.matches(search)))
    }
}

/// Validate text as the value of the field holding `tag` tags.
///
/// Used by the generated field types; a field accepts exactly what the
/// corresponding tag accepts, except that a date must be a single date.
///
/// # Errors
///
/// Returns [`CatalogError::Validation`] when the text is empty or invalid.
pub fn validate_field(tag: &'static str, raw: &str) -> Result<BookTag> {
    if raw.is_empty() {
        return Err(CatalogError::Validation(format!("book {tag} is missing")));
    }

    match RawTag::new(tag, raw).validate()? {
        Tag::Book(BookTag::Date(date)) if date.as_single().is_none() => {
            Err(CatalogError::Validation(format!(
                "book date must be a single date, not the range `{raw}`"
            )))
        },
        Tag::Book(BookTag::Any(_)) => Err(CatalogError::Validation(
            "`:any:` is a search tag and cannot be stored in a book".to_string(),
        )),
        Tag::Book(value) => Ok(value),
        Tag::Operation(operation) => Err(CatalogError::Validation(format!(
            "{operation} is a command, not a book field"
        ))),
    }
}

define_book_field!(
    /// Numeric catalog identifier, unique within a catalog.
    Id,
    "id"
);

define_book_field!(
    /// Book title.
    Title,
    "title"
);

define_book_field!(
    /// Author, as written on the title page.
    Author,
    "author"
);

define_book_field!(
    /// Publisher name.
    Publisher,
    "publisher"
);

define_book_field!(
    /// Publication date: `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
    Date,
    "date"
);

impl Id {
    /// The numeric id, once validated.
    #[must_use]
    pub fn number(&self) -> Option<u64> {
        match self.value() {
            Some(BookTag::Id(id)) => Some(*id),
            _ => None,
        }
    }
}
