#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # bookcat: a tag-driven book catalog
//!
//! Books (id, title, author, publisher, date) are added, searched and
//! removed with lines of `:tag: argument` pairs.
//!
//! ## Quick Start
//!
//! ```
//! use bookcat::{prompt, PromptConfig, Session};
//! use std::io::Cursor;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let input = Cursor::new(
//!     ":add: :id: 42 :title: Dune :author: Frank Herbert :publisher: Chilton Books :date: 1965\n\
//!      :author: herbert :date: 1960..1969\n",
//! );
//! let mut session = Session::new(Vec::new());
//! let config = PromptConfig { prompt: String::new(), default_limit: None };
//! prompt::run(input, &mut session, &config)?;
//!
//! let output = String::from_utf8(session.into_output())?;
//! assert!(output.contains("[2] 42\tDune"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`grammar`]: `:tag:` recognition and line splitting
//! - [`tag`]: book tags, operation tags and the tag registry
//! - [`date`]: partial dates and date ranges
//! - [`fields`]: the five book fields
//! - [`book`]: the book record and its match score
//! - [`bundle`]: search queries
//! - [`catalog`]: the in-memory catalog
//! - [`command`]: one input line as one command
//! - [`session`]: the context commands run against
//! - [`prompt`]: the read, run, report loop
//! - [`json`]: JSON rendering of books
//! - [`error`]: Error types and result type

pub mod book;
pub mod bundle;
pub mod catalog;
pub mod command;
pub mod date;
pub mod error;
pub mod fields;
pub mod grammar;
pub mod json;
pub mod macros;
pub mod prompt;
pub mod session;
pub mod tag;

pub use book::Book;
pub use bundle::TagBundle;
pub use catalog::{Catalog, SearchHit};
pub use command::Command;
pub use date::{DateQuery, PartialDate};
pub use error::{CatalogError, Result};
pub use fields::BookField;
pub use grammar::{is_tag, parse_argument, parse_line, RawTag};
pub use prompt::{PromptConfig, PromptStats};
pub use session::Session;
pub use tag::{BookTag, OperationTag, Tag};
