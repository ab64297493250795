//! JSON rendering of books.
//!
//! Books are written as an array of flat objects whose keys are the field
//! names, in the same order as [`Book`]'s printed form:
//!
//! ```text
//! [
//!   {
//!     "id": "42",
//!     "title": "Dune",
//!     "author": "Frank Herbert",
//!     "publisher": "Chilton Books",
//!     "date": "1965-08-01"
//!   }
//! ]
//! ```

use crate::book::Book;
use crate::error::Result;
use crate::fields::BookField;
use serde::Serialize;

/// Borrowed view of a book, in serialization order.
#[derive(Debug, Serialize)]
struct BookRecord<'a> {
    id: &'a str,
    title: &'a str,
    author: &'a str,
    publisher: &'a str,
    date: &'a str,
}

impl<'a> From<&'a Book> for BookRecord<'a> {
    fn from(book: &'a Book) -> Self {
        BookRecord {
            id: book.id().as_str(),
            title: book.title().as_str(),
            author: book.author().as_str(),
            publisher: book.publisher().as_str(),
            date: book.date().as_str(),
        }
    }
}

/// Convert a single book to a JSON value.
///
/// # Errors
///
/// Returns an error if the book cannot be serialized.
pub fn book_to_json(book: &Book) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(BookRecord::from(book))?)
}

/// Render books as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error if the books cannot be serialized.
pub fn books_to_json<'a, I>(books: I) -> Result<String>
where
    I: IntoIterator<Item = &'a Book>,
{
    let records: Vec<BookRecord<'a>> = books.into_iter().map(BookRecord::from).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dune() -> Book {
        let mut book = Book::new();
        book.set_id("42");
        book.set_title("Dune");
        book.set_author("Frank Herbert");
        book.set_publisher("Chilton Books");
        book.set_date("1965-08-01");
        book.validate().unwrap();
        book
    }

    #[test]
    fn test_book_to_json() {
        let value = book_to_json(&dune()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "42",
                "title": "Dune",
                "author": "Frank Herbert",
                "publisher": "Chilton Books",
                "date": "1965-08-01"
            })
        );
    }

    #[test]
    fn test_books_to_json_array() {
        let books = [dune()];
        let text = books_to_json(&books).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["title"], "Dune");
        assert_eq!(value.as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn test_empty_catalog_is_empty_array() {
        assert_eq!(books_to_json(std::iter::empty()).unwrap(), "[]");
    }
}
