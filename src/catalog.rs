//! The in-memory book catalog.
//!
//! Books are keyed by their numeric id and kept in insertion order, so that
//! listings and tied search results come out in the order books were added.

use crate::book::Book;
use crate::bundle::TagBundle;
use crate::error::{CatalogError, Result};
use indexmap::IndexMap;
use tracing::{debug, info};

/// A collection of validated books, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: IndexMap<u64, Book>,
}

/// A book found by [`Catalog::search`], with its match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit<'a> {
    /// The matching book
    pub book: &'a Book,
    /// Its score against the query (always > 0)
    pub score: u32,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Catalog {
            books: IndexMap::new(),
        }
    }

    /// Add a validated book.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] if the book has not been
    /// validated, and [`CatalogError::DuplicateId`] if its id is taken.
    pub fn insert(&mut self, book: Book) -> Result<()> {
        let Some(id) = book.number().filter(|_| book.is_valid()) else {
            return Err(CatalogError::Validation(
                "only validated books can be cataloged".to_string(),
            ));
        };
        if self.books.contains_key(&id) {
            return Err(CatalogError::DuplicateId(id));
        }
        info!(id, title = book.title().as_str(), "cataloged book");
        self.books.insert(id, book);
        Ok(())
    }

    /// Remove and return the book with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no book has this id.
    pub fn remove(&mut self, id: u64) -> Result<Book> {
        let book = self
            .books
            .shift_remove(&id)
            .ok_or(CatalogError::NotFound(id))?;
        info!(id, "removed book");
        Ok(book)
    }

    /// Look a book up by id.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Book> {
        self.books.get(&id)
    }

    /// Number of cataloged books.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the catalog has no books.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Iterate over the books in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    /// Rank books against a query.
    ///
    /// Returns every book with a positive score, highest score first. Books
    /// with equal scores keep their insertion order.
    #[must_use]
    pub fn search(&self, query: &TagBundle) -> Vec<SearchHit<'_>> {
        let mut hits: Vec<SearchHit<'_>> = self
            .books
            .values()
            .map(|book| SearchHit {
                book,
                score: book.score(query),
            })
            .filter(|hit| hit.score > 0)
            .collect();
        hits.sort_by(|a, b| b.score.cmp(&a.score));
        debug!(tags = query.len(), hits = hits.len(), "searched catalog");
        hits
    }
}
