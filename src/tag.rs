//! Book tags, operation tags and the tag registry.
//!
//! Every tag that can appear in an input line belongs to one of two closed
//! variant sets:
//!
//! - [`BookTag`]: a book field value. Used as a search predicate in a
//!   [`TagBundle`](crate::bundle::TagBundle), and as the stored value of a
//!   [`Book`](crate::book::Book) field.
//! - [`OperationTag`]: a command such as `:add:` or `:search:`, executed
//!   through [`OperationTag::operate`].
//!
//! A [`RawTag`] from the parser becomes a [`Tag`] only through
//! [`RawTag::validate`], which looks the name up in the registry and checks
//! its argument.
//!
//! # Examples
//!
//! ```
//! use bookcat::grammar::RawTag;
//! use bookcat::tag::{BookTag, Tag};
//!
//! let tag = RawTag::new("id", "42").validate().unwrap();
//! assert_eq!(tag, Tag::Book(BookTag::Id(42)));
//! assert_eq!(tag.to_string(), ":id: 42");
//! ```

use crate::date::DateQuery;
use crate::error::{CatalogError, Result};
use crate::grammar::RawTag;
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// A validated tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    /// A book field value or search predicate
    Book(BookTag),
    /// A command
    Operation(OperationTag),
}

/// A book field value, usable as a search predicate.
///
/// Text payloads are stored whitespace-normalized but otherwise as typed;
/// case and Unicode folding happen at match time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookTag {
    /// `:id:` numeric catalog identifier
    Id(u64),
    /// `:title:`
    Title(String),
    /// `:author:`
    Author(String),
    /// `:publisher:`
    Publisher(String),
    /// `:date:` a date, or a range when searching
    Date(DateQuery),
    /// `:any:` free text searched in title, author and publisher
    Any(String),
}

/// A command tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationTag {
    /// `:add:` catalog a book built from the line's book tags
    Add,
    /// `:search: [limit]` rank books against the line's book tags
    Search {
        /// Maximum number of hits to print
        limit: Option<usize>,
    },
    /// `:delete: <id>` remove a book
    Delete(u64),
    /// `:list:` print every book
    List,
    /// `:export:` print the catalog as JSON
    Export,
    /// `:help:` print the tag reference
    Help,
    /// `:quit:` stop the prompt
    Quit,
}

/// Names of every registered book tag.
pub const BOOK_TAG_NAMES: [&str; 6] = ["id", "title", "author", "publisher", "date", "any"];

/// Names of every registered operation tag.
pub const OPERATION_TAG_NAMES: [&str; 7] =
    ["add", "search", "delete", "list", "export", "help", "quit"];

impl RawTag {
    /// Look the tag name up in the registry and validate its argument.
    ///
    /// This is the only transition from a parsed tag to a usable one. An
    /// `:id:` argument is parsed into its numeric form here.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownTag`] for names outside the registry and
    /// [`CatalogError::Validation`] when the argument is missing, superfluous
    /// or malformed for the tag kind.
    pub fn validate(self) -> Result<Tag> {
        let RawTag { name, argument } = self;
        let tag = match name.as_str() {
            "id" => Tag::Book(BookTag::Id(parse_id(&name, &argument)?)),
            "title" => Tag::Book(BookTag::Title(require_text(&name, argument)?)),
            "author" => Tag::Book(BookTag::Author(require_text(&name, argument)?)),
            "publisher" => Tag::Book(BookTag::Publisher(require_text(&name, argument)?)),
            "date" => {
                let text = require_text(&name, argument)?;
                Tag::Book(BookTag::Date(DateQuery::parse(&text)?))
            },
            "any" => Tag::Book(BookTag::Any(require_text(&name, argument)?)),
            "add" => no_argument(&name, &argument, OperationTag::Add)?,
            "search" => {
                let limit = if argument.is_empty() {
                    None
                } else {
                    Some(parse_limit(&argument)?)
                };
                Tag::Operation(OperationTag::Search { limit })
            },
            "delete" => Tag::Operation(OperationTag::Delete(parse_id(&name, &argument)?)),
            "list" => no_argument(&name, &argument, OperationTag::List)?,
            "export" => no_argument(&name, &argument, OperationTag::Export)?,
            "help" => no_argument(&name, &argument, OperationTag::Help)?,
            "quit" => no_argument(&name, &argument, OperationTag::Quit)?,
            _ => return Err(CatalogError::UnknownTag(name)),
        };
        Ok(tag)
    }
}

fn require_text(name: &str, argument: String) -> Result<String> {
    if argument.is_empty() {
        Err(CatalogError::Validation(format!(
            "`:{name}:` needs an argument"
        )))
    } else {
        Ok(argument)
    }
}

fn no_argument(name: &str, argument: &str, operation: OperationTag) -> Result<Tag> {
    if argument.is_empty() {
        Ok(Tag::Operation(operation))
    } else {
        Err(CatalogError::Validation(format!(
            "`:{name}:` takes no argument, found `{argument}`"
        )))
    }
}

fn parse_id(name: &str, argument: &str) -> Result<u64> {
    if argument.is_empty() {
        return Err(CatalogError::Validation(format!(
            "`:{name}:` needs a numeric id"
        )));
    }
    if !argument.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CatalogError::Validation(format!(
            "`{argument}` is not a numeric id"
        )));
    }
    argument
        .parse()
        .map_err(|_| CatalogError::Validation(format!("id `{argument}` is out of range")))
}

fn parse_limit(argument: &str) -> Result<usize> {
    match argument.parse::<usize>() {
        Ok(0) | Err(_) => Err(CatalogError::Validation(format!(
            "search limit must be a positive integer, found `{argument}`"
        ))),
        Ok(limit) => Ok(limit),
    }
}

/// Fold text for comparison: NFKC, lowercase, single spaces.
fn fold(text: &str) -> String {
    let normalized: String = text.nfkc().collect::<String>().to_lowercase();
    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl BookTag {
    /// The registry name of this tag kind, without colons.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            BookTag::Id(_) => "id",
            BookTag::Title(_) => "title",
            BookTag::Author(_) => "author",
            BookTag::Publisher(_) => "publisher",
            BookTag::Date(_) => "date",
            BookTag::Any(_) => "any",
        }
    }

    /// Check whether this stored field value satisfies a search predicate.
    ///
    /// `self` is a book's field value, `search` a tag from a query. Tags of
    /// unrelated kinds never match. Per field:
    ///
    /// - `id`: numeric equality
    /// - `title`, `author`: case-insensitive substring
    /// - `publisher`: case-insensitive equality
    /// - `date`: the stored date overlaps the searched date or range
    /// - `any`: case-insensitive substring of a title, author or publisher
    ///
    /// Text comparisons fold both sides with NFKC normalization and collapse
    /// whitespace.
    #[must_use]
    pub fn matches(&self, search: &BookTag) -> bool {
        match (self, search) {
            (BookTag::Id(value), BookTag::Id(wanted)) => value == wanted,
            (
                BookTag::Title(value) | BookTag::Author(value),
                BookTag::Title(wanted) | BookTag::Author(wanted),
            ) if self.name() == search.name() => fold(value).contains(&fold(wanted)),
            (BookTag::Publisher(value), BookTag::Publisher(wanted)) => {
                fold(value) == fold(wanted)
            },
            (BookTag::Date(value), BookTag::Date(wanted)) => value
                .as_single()
                .is_some_and(|date| wanted.matches(date)),
            (
                BookTag::Title(value) | BookTag::Author(value) | BookTag::Publisher(value),
                BookTag::Any(wanted),
            ) => fold(value).contains(&fold(wanted)),
            _ => false,
        }
    }

    /// The argument text of this tag, as it would be typed after the name.
    #[must_use]
    pub fn argument(&self) -> String {
        match self {
            BookTag::Id(id) => id.to_string(),
            BookTag::Title(text)
            | BookTag::Author(text)
            | BookTag::Publisher(text)
            | BookTag::Any(text) => text.clone(),
            BookTag::Date(date) => date.to_string(),
        }
    }
}

impl OperationTag {
    /// The registry name of this command, without colons.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            OperationTag::Add => "add",
            OperationTag::Search { .. } => "search",
            OperationTag::Delete(_) => "delete",
            OperationTag::List => "list",
            OperationTag::Export => "export",
            OperationTag::Help => "help",
            OperationTag::Quit => "quit",
        }
    }

    /// Whether this command operates on the book tags of its line.
    #[must_use]
    pub fn takes_book_tags(&self) -> bool {
        matches!(self, OperationTag::Add | OperationTag::Search { .. })
    }
}

impl fmt::Display for BookTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}: {}", self.name(), self.argument())
    }
}

impl fmt::Display for OperationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationTag::Search { limit: Some(limit) } => write!(f, ":search: {limit}"),
            OperationTag::Delete(id) => write!(f, ":delete: {id}"),
            _ => write!(f, ":{}:", self.name()),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Book(tag) => tag.fmt(f),
            Tag::Operation(tag) => tag.fmt(f),
        }
    }
}
