//! Common test helpers and utilities shared across test suite.

use bookcat::{Book, Catalog};

/// Creates a validated book from its five field texts.
pub fn create_book(id: &str, title: &str, author: &str, publisher: &str, date: &str) -> Book {
    let mut book = Book::new();
    book.set_id(id);
    book.set_title(title);
    book.set_author(author);
    book.set_publisher(publisher);
    book.set_date(date);
    book.validate().expect("test book should validate");
    book
}

/// Creates the "Dune" book used by the end-to-end scenarios.
#[allow(dead_code)]
pub fn create_dune(id: &str) -> Book {
    create_book(id, "Dune", "Frank Herbert", "Chilton Books", "1965-08-01")
}

/// Creates a small catalog with a mix of authors, publishers and dates.
#[allow(dead_code)]
pub fn create_realistic_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    for book in [
        create_book("1", "The Left Hand of Darkness", "Ursula K. Le Guin", "Ace Books", "1969-03"),
        create_book("2", "Dune", "Frank Herbert", "Chilton Books", "1965-08-01"),
        create_book("3", "The Dispossessed", "Ursula K. Le Guin", "Harper & Row", "1974-05"),
        create_book("4", "Solaris", "Stanisław Lem", "Wydawnictwo MON", "1961"),
        create_book("5", "Dune Messiah", "Frank Herbert", "Putnam", "1969-10-15"),
    ] {
        catalog.insert(book).expect("test ids are unique");
    }
    catalog
}
