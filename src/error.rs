//! Error types for catalog operations.
//!
//! This module provides the [`CatalogError`] type for all parsing, validation
//! and catalog operations, and the [`Result`] convenience type.

use thiserror::Error;

/// Error type for all catalog operations.
///
/// Parsing and validation errors abort the processing of a single input
/// line; the prompt reports them and moves on to the next line.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A word was found where a `:tag:` was expected.
    #[error("Grammar error: {0}")]
    Grammar(String),

    /// A tag or field argument is present but semantically invalid.
    #[error("Invalid argument: {0}")]
    Validation(String),

    /// The tag name is not in the tag registry.
    #[error("Unknown tag: `:{0}:`")]
    UnknownTag(String),

    /// A book with this id is already in the catalog.
    #[error("Duplicate id: a book with id {0} is already cataloged")]
    DuplicateId(u64),

    /// No book with this id is in the catalog.
    #[error("Not found: no book with id {0}")]
    NotFound(u64),

    /// Error while rendering books as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error from the underlying input or output stream.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// Whether the prompt can report this error and continue with the next line.
    ///
    /// Only failures of the underlying streams are fatal.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, CatalogError::Io(_))
    }
}

/// Convenience type alias for [`std::result::Result`] with [`CatalogError`].
pub type Result<T> = std::result::Result<T, CatalogError>;
