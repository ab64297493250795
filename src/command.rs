//! One input line as one command.
//!
//! A line holds at most one operation tag plus the book tags it works on:
//!
//! ```text
//! :add: :id: 42 :title: Dune :author: Frank Herbert :publisher: Chilton :date: 1965
//! :search: 5 :author: herbert :date: 1960..1970
//! :title: dune                      (no operation tag: an implicit :search:)
//! ```
//!
//! Every tag of the line is validated before the command is returned, so a
//! malformed line never runs halfway.

use crate::bundle::TagBundle;
use crate::error::{CatalogError, Result};
use crate::grammar::parse_line;
use crate::session::Session;
use crate::tag::{OperationTag, Tag};
use std::io::Write;

/// An operation and the book tags of its line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    operation: OperationTag,
    bundle: TagBundle,
}

impl Command {
    /// Create a command from its parts.
    #[must_use]
    pub fn new(operation: OperationTag, bundle: TagBundle) -> Self {
        Command { operation, bundle }
    }

    /// Parse and validate an input line.
    ///
    /// Returns `Ok(None)` for a blank line.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Grammar`] if the line does not start with a tag or
    ///   holds more than one operation tag
    /// - [`CatalogError::UnknownTag`] for a tag outside the registry
    /// - [`CatalogError::Validation`] for an invalid argument, or when the
    ///   book tags do not fit the operation (`:add:` and `:search:` need at
    ///   least one; the other commands accept none)
    ///
    /// # Examples
    ///
    /// ```
    /// use bookcat::{BookTag, Command, OperationTag};
    ///
    /// let command = Command::parse(":id: 42 :title: Dune").unwrap().unwrap();
    /// assert_eq!(command.operation(), OperationTag::Search { limit: None });
    /// assert_eq!(command.bundle().get(0), Some(&BookTag::Id(42)));
    /// ```
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let raw_tags = parse_line(line)?;
        if raw_tags.is_empty() {
            return Ok(None);
        }

        let mut operation = None;
        let mut bundle = TagBundle::new();
        for raw in raw_tags {
            match raw.validate()? {
                Tag::Book(tag) => bundle.push(tag),
                Tag::Operation(tag) => {
                    if let Some(first) = operation.replace(tag) {
                        return Err(CatalogError::Grammar(format!(
                            "one command per line, found {first} and {tag}"
                        )));
                    }
                },
            }
        }

        let operation = operation.unwrap_or(OperationTag::Search { limit: None });
        if operation.takes_book_tags() && bundle.is_empty() {
            return Err(CatalogError::Validation(format!(
                "{operation} needs at least one book tag"
            )));
        }
        if !operation.takes_book_tags() && !bundle.is_empty() {
            return Err(CatalogError::Validation(format!(
                "{operation} does not take book tags"
            )));
        }

        Ok(Some(Command { operation, bundle }))
    }

    /// The operation to run.
    #[must_use]
    pub fn operation(&self) -> OperationTag {
        self.operation
    }

    /// The book tags of the line, in input order.
    #[must_use]
    pub fn bundle(&self) -> &TagBundle {
        &self.bundle
    }

    /// Run the command against a session.
    ///
    /// # Errors
    ///
    /// See [`OperationTag::operate`].
    pub fn execute<W: Write>(&self, session: &mut Session<W>) -> Result<()> {
        self.operation.operate(&self.bundle, session)
    }
}
