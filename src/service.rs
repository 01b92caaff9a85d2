//! Holds the currently selected strategy per capability family.

use std::io::{self, Write};

use crate::book::Book;
use crate::strategy::{DisplayStrategy, PrintStrategy, SerializeFormat};

/// Dispatches book operations to the selected strategies.
///
/// Each slot starts unset and is overwritten by the matching setter. Invoking
/// a family whose slot is unset does nothing (display, print) or yields an
/// empty string (serialize).
#[derive(Debug, Clone, Default)]
pub struct BookService {
    display: Option<DisplayStrategy>,
    print: Option<PrintStrategy>,
    serialize: Option<SerializeFormat>,
}

impl BookService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_display_strategy(&mut self, strategy: DisplayStrategy) {
        self.display = Some(strategy);
    }

    pub fn set_print_strategy(&mut self, strategy: PrintStrategy) {
        self.print = Some(strategy);
    }

    pub fn set_serialize_format(&mut self, format: SerializeFormat) {
        self.serialize = Some(format);
    }

    pub fn display_strategy(&self) -> Option<DisplayStrategy> {
        self.display
    }

    pub fn print_strategy(&self) -> Option<PrintStrategy> {
        self.print
    }

    pub fn serialize_format(&self) -> Option<SerializeFormat> {
        self.serialize
    }

    /// Show the book content with the selected display strategy.
    pub fn display<W: Write + ?Sized>(&self, book: &Book, out: &mut W) -> io::Result<()> {
        match self.display {
            Some(strategy) => strategy.display(book.content(), out),
            None => Ok(()),
        }
    }

    pub fn print_book<W: Write + ?Sized>(&self, book: &Book, out: &mut W) -> io::Result<()> {
        match self.print {
            Some(strategy) => strategy.print_book(book.title(), book.content(), out),
            None => Ok(()),
        }
    }

    pub fn serialize(&self, book: &Book) -> String {
        self.serialize
            .map(|format| format.serialize(book))
            .unwrap_or_default()
    }
}
