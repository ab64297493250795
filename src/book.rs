//! The book record and its match scoring.
//!
//! A [`Book`] aggregates five [`BookField`]s. It starts empty, has its fields
//! set one by one, and must be validated before it can be cataloged or
//! scored. Setting a field again makes the book unvalidated until the next
//! [`Book::validate`].
//!
//! # Examples
//!
//! ```
//! use bookcat::{Book, BookTag, TagBundle};
//!
//! let mut book = Book::new();
//! book.set_id("42");
//! book.set_title("Dune");
//! book.set_author("Frank Herbert");
//! book.set_publisher("Chilton Books");
//! book.set_date("1965-08-01");
//! book.validate().unwrap();
//!
//! let query: TagBundle = vec![BookTag::Id(42), BookTag::Title("dune".into())]
//!     .into_iter()
//!     .collect();
//! assert_eq!(book.score(&query), 2);
//! ```

use crate::bundle::TagBundle;
use crate::error::{CatalogError, Result};
use crate::fields::{Author, BookField, Date, Id, Publisher, Title};
use crate::tag::BookTag;
use std::fmt;
use std::io::{self, Write};

/// A catalog entry: id, title, author, publisher and publication date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Book {
    id: Id,
    title: Title,
    author: Author,
    publisher: Publisher,
    date: Date,
}

impl Book {
    /// Create an empty, unvalidated book.
    #[must_use]
    pub fn new() -> Self {
        Book::default()
    }

    /// Build and validate a book from the book tags of an `:add:` line.
    ///
    /// When a field kind appears more than once, the last tag wins.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] if a field is missing or invalid,
    /// or if the bundle holds a tag that cannot be stored (such as `:any:`).
    pub fn from_bundle(bundle: &TagBundle) -> Result<Self> {
        let mut book = Book::new();
        for tag in bundle {
            let argument = tag.argument();
            match tag {
                BookTag::Id(_) => book.set_id(&argument),
                BookTag::Title(_) => book.set_title(&argument),
                BookTag::Author(_) => book.set_author(&argument),
                BookTag::Publisher(_) => book.set_publisher(&argument),
                BookTag::Date(_) => book.set_date(&argument),
                BookTag::Any(_) => {
                    return Err(CatalogError::Validation(
                        "`:any:` is a search tag and cannot be stored in a book".to_string(),
                    ));
                },
            }
        }
        book.validate()?;
        Ok(book)
    }

    /// Set the id text.
    pub fn set_id(&mut self, id: &str) {
        self.id.set(id);
    }

    /// Set the title text.
    pub fn set_title(&mut self, title: &str) {
        self.title.set(title);
    }

    /// Set the author text.
    pub fn set_author(&mut self, author: &str) {
        self.author.set(author);
    }

    /// Set the publisher text.
    pub fn set_publisher(&mut self, publisher: &str) {
        self.publisher.set(publisher);
    }

    /// Set the date text.
    pub fn set_date(&mut self, date: &str) {
        self.date.set(date);
    }

    /// Validate every field, in id, title, author, publisher, date order.
    ///
    /// # Errors
    ///
    /// Returns the first field's [`CatalogError::Validation`].
    pub fn validate(&mut self) -> Result<()> {
        self.id.validate()?;
        self.title.validate()?;
        self.author.validate()?;
        self.publisher.validate()?;
        self.date.validate()?;
        Ok(())
    }

    /// Whether every field is validated.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.id.is_valid()
            && self.title.is_valid()
            && self.author.is_valid()
            && self.publisher.is_valid()
            && self.date.is_valid()
    }

    /// The numeric id, once validated.
    #[must_use]
    pub fn number(&self) -> Option<u64> {
        self.id.number()
    }

    /// The id field.
    #[must_use]
    pub fn id(&self) -> &Id {
        &self.id
    }

    /// The title field.
    #[must_use]
    pub fn title(&self) -> &Title {
        &self.title
    }

    /// The author field.
    #[must_use]
    pub fn author(&self) -> &Author {
        &self.author
    }

    /// The publisher field.
    #[must_use]
    pub fn publisher(&self) -> &Publisher {
        &self.publisher
    }

    /// The date field.
    #[must_use]
    pub fn date(&self) -> &Date {
        &self.date
    }

    /// Score how well this book satisfies a query.
    ///
    /// Every tag of the bundle is offered to all five fields and each field
    /// it matches adds 1. The sum does not depend on the bundle order. An
    /// empty bundle, or an unvalidated book, scores 0.
    #[must_use]
    pub fn score(&self, bundle: &TagBundle) -> u32 {
        if !self.is_valid() {
            return 0;
        }
        bundle
            .iter()
            .map(|tag| {
                self.id.score(tag)
                    + self.title.score(tag)
                    + self.author.score(tag)
                    + self.publisher.score(tag)
                    + self.date.score(tag)
            })
            .sum()
    }

    /// Write the book as one line of tab and pipe separated fields.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")
    }

    /// Print the book to standard output.
    ///
    /// # Errors
    ///
    /// Returns an error if standard output cannot be written.
    pub fn print(&self) -> io::Result<()> {
        self.write_to(&mut io::stdout().lock())
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t| {}\t| {}\t| {}",
            self.id, self.title, self.author, self.publisher, self.date
        )
    }
}
