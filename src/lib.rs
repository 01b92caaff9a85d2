//! # bookstrat
//!
//! Swappable display, print and serialization strategies for an in-memory
//! book.
//!
//! ## Features
//!
//! - Show book content on the console, as-is or reversed
//! - "Print" a formatted description of the book, as-is or reversed
//! - Serialize the book to JSON or XML text
//! - Run an ordered list of `(command, variant)` pairs against a book
//!
//! ## Quick Start
//!
//! ```no_run
//! use bookstrat::{Book, run};
//!
//! let book = Book::sample();
//! // Prints ".tnetnoc elpmas emos si sihT" and returns the XML
//! let xml = run(&book, [("display", "reverse"), ("serialize", "xml")]).unwrap();
//! assert!(xml.is_some());
//! ```
//!
//! ## Capturing Output
//!
//! [`run_with_writer`] takes any [`std::io::Write`] sink in place of stdout:
//!
//! ```
//! use bookstrat::{Book, run_with_writer};
//!
//! let mut out = Vec::new();
//! let result = run_with_writer(&Book::sample(), [("print", "console")], &mut out)?;
//! assert_eq!(result, None);
//! assert_eq!(out, b"Printing the book: Sample Book\nThis is some sample content.\n");
//! # Ok::<(), bookstrat::Error>(())
//! ```

pub mod book;
pub mod command;
pub mod error;
pub mod service;
pub mod strategy;
pub(crate) mod util;

pub use book::Book;
pub use command::{Command, DEFAULT_COMMANDS, run, run_with_writer};
pub use error::{Error, Result};
pub use service::BookService;
pub use strategy::{DisplayStrategy, PrintStrategy, SerializeFormat};
