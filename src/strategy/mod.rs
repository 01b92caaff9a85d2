//! Interchangeable strategies for the three capability families.
//!
//! Each family is a closed enum selected by variant name:
//!
//! - [`DisplayStrategy`]: write the book content to a console sink
//! - [`PrintStrategy`]: write a formatted description of the book
//! - [`SerializeFormat`]: render the book as JSON or XML text
//!
//! Console strategies take any [`std::io::Write`] so output can be captured;
//! the command-line driver hands them locked stdout.
//!
//! # Example
//!
//! ```
//! use bookstrat::Book;
//! use bookstrat::strategy::{DisplayStrategy, SerializeFormat};
//!
//! let book = Book::sample();
//! let mut out = Vec::new();
//! "reverse".parse::<DisplayStrategy>()?.display(book.content(), &mut out)?;
//! assert_eq!(out, b".tnetnoc elpmas emos si sihT\n");
//!
//! let json = SerializeFormat::Json.serialize(&book);
//! assert_eq!(json, r#"{"title": "Sample Book", "content": "This is some sample content."}"#);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use thiserror::Error;

mod display;
mod print;
mod serialize;

pub use display::DisplayStrategy;
pub use print::PrintStrategy;
pub use serialize::{SerializeFormat, to_json, to_xml};

/// A variant name that does not belong to the requested family.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {family} strategy: {name}")]
pub struct UnknownVariant {
    pub family: &'static str,
    pub name: String,
}

impl UnknownVariant {
    fn new(family: &'static str, name: &str) -> Self {
        Self {
            family,
            name: name.to_string(),
        }
    }
}
