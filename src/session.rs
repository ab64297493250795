//! The context commands run against, and the commands themselves.
//!
//! A [`Session`] owns the catalog and the output stream. Operation tags
//! receive it explicitly through [`OperationTag::operate`]; there is no
//! global prompt state.

use crate::book::Book;
use crate::bundle::TagBundle;
use crate::catalog::Catalog;
use crate::error::Result;
use crate::json;
use crate::tag::OperationTag;
use std::io::Write;
use tracing::debug;

/// Tag reference printed by `:help:`.
pub const HELP: &str = "\
Commands (one per line):
  :add: <book tags>             catalog a book; needs :id: :title: :author: :publisher: :date:
  :search: [limit] <book tags>  rank books by how many fields match
  <book tags>                   same as :search:
  :delete: <id>                 remove a book
  :list:                        print every book
  :export:                      print the catalog as JSON
  :help:                        print this reference
  :quit:                        leave
Book tags:
  :id: <digits>                 exact id
  :title: <text>                title contains text (any case)
  :author: <text>               author contains text (any case)
  :publisher: <text>            publisher equals text (any case)
  :date: <date>[..<date>]       YYYY, YYYY-MM or YYYY-MM-DD; ranges may be open
  :any: <text>                  title, author or publisher contains text";

/// Mutable state shared by the commands of one prompt session.
#[derive(Debug)]
pub struct Session<W> {
    catalog: Catalog,
    out: W,
    running: bool,
    default_limit: Option<usize>,
}

impl<W: Write> Session<W> {
    /// Start a session with an empty catalog, writing to `out`.
    #[must_use]
    pub fn new(out: W) -> Self {
        Session::with_catalog(Catalog::new(), out)
    }

    /// Start a session over an existing catalog.
    #[must_use]
    pub fn with_catalog(catalog: Catalog, out: W) -> Self {
        Session {
            catalog,
            out,
            running: true,
            default_limit: None,
        }
    }

    /// Limit the number of hits printed by searches without their own limit.
    pub fn set_default_limit(&mut self, limit: Option<usize>) {
        self.default_limit = limit;
    }

    /// The catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The output stream.
    pub fn output(&mut self) -> &mut W {
        &mut self.out
    }

    /// Whether `:quit:` has not been run yet.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// End the session, returning the output stream.
    pub fn into_output(self) -> W {
        self.out
    }

    fn write_book(&mut self, prefix: &str, book: &Book) -> Result<()> {
        write!(self.out, "{prefix}")?;
        book.write_to(&mut self.out)?;
        Ok(())
    }
}

impl OperationTag {
    /// Run this command against a session.
    ///
    /// `bundle` holds the book tags of the command's line. Output goes to the
    /// session's output stream.
    ///
    /// # Errors
    ///
    /// Returns validation and catalog errors for the command (such as an
    /// incomplete book or an unknown id), and I/O errors from the output
    /// stream. A failed command leaves the catalog unchanged.
    pub fn operate<W: Write>(&self, bundle: &TagBundle, session: &mut Session<W>) -> Result<()> {
        debug!(command = self.name(), tags = bundle.len(), "running command");
        match *self {
            OperationTag::Add => {
                let book = Book::from_bundle(bundle)?;
                let line = book.to_string();
                session.catalog.insert(book)?;
                writeln!(session.out, "added: {line}")?;
            },
            OperationTag::Search { limit } => {
                let limit = limit.or(session.default_limit).unwrap_or(usize::MAX);
                let hits = session.catalog.search(bundle);
                if hits.is_empty() {
                    writeln!(session.out, "no matching books")?;
                }
                for hit in hits.iter().take(limit) {
                    write!(session.out, "[{}] ", hit.score)?;
                    hit.book.write_to(&mut session.out)?;
                }
            },
            OperationTag::Delete(id) => {
                let book = session.catalog.remove(id)?;
                session.write_book("deleted: ", &book)?;
            },
            OperationTag::List => {
                if session.catalog.is_empty() {
                    writeln!(session.out, "catalog is empty")?;
                }
                for book in session.catalog.iter() {
                    book.write_to(&mut session.out)?;
                }
            },
            OperationTag::Export => {
                let text = json::books_to_json(session.catalog.iter())?;
                writeln!(session.out, "{text}")?;
            },
            OperationTag::Help => writeln!(session.out, "{HELP}")?,
            OperationTag::Quit => session.running = false,
        }
        Ok(())
    }
}
