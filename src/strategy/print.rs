use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use super::UnknownVariant;
use crate::util::reverse_chars;

/// How a book is "printed": a header line naming the title, then the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrintStrategy {
    Console,
    /// Content is reversed; the title is not.
    Reverse,
}

impl PrintStrategy {
    pub const ALL: [Self; 2] = [Self::Console, Self::Reverse];

    pub fn name(self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::Reverse => "reverse",
        }
    }

    pub fn print_book<W: Write + ?Sized>(
        self,
        title: &str,
        content: &str,
        out: &mut W,
    ) -> io::Result<()> {
        match self {
            Self::Console => writeln!(out, "Printing the book: {title}\n{content}"),
            Self::Reverse => writeln!(
                out,
                "Printing the book in reverse: {title}...\n{}",
                reverse_chars(content)
            ),
        }
    }
}

impl FromStr for PrintStrategy {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| UnknownVariant::new("print", s))
    }
}

impl fmt::Display for PrintStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
