use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use super::UnknownVariant;
use crate::util::reverse_chars;

/// How book content is shown on the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayStrategy {
    /// Content unchanged.
    Console,
    /// Content with its characters in reverse order.
    Reverse,
}

impl DisplayStrategy {
    pub const ALL: [Self; 2] = [Self::Console, Self::Reverse];

    pub fn name(self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::Reverse => "reverse",
        }
    }

    /// Write `content` followed by a newline.
    pub fn display<W: Write + ?Sized>(self, content: &str, out: &mut W) -> io::Result<()> {
        match self {
            Self::Console => writeln!(out, "{content}"),
            Self::Reverse => writeln!(out, "{}", reverse_chars(content)),
        }
    }
}

impl FromStr for DisplayStrategy {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| UnknownVariant::new("display", s))
    }
}

impl fmt::Display for DisplayStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(strategy: DisplayStrategy, content: &str) -> String {
        let mut out = Vec::new();
        strategy.display(content, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_console_display() {
        assert_eq!(render(DisplayStrategy::Console, "hello"), "hello\n");
    }

    #[test]
    fn test_reverse_display() {
        assert_eq!(render(DisplayStrategy::Reverse, "hello"), "olleh\n");
        assert_eq!(render(DisplayStrategy::Reverse, ""), "\n");
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("console".parse(), Ok(DisplayStrategy::Console));
        assert_eq!("reverse".parse(), Ok(DisplayStrategy::Reverse));
        // Names are case-sensitive
        assert!("Console".parse::<DisplayStrategy>().is_err());
        assert_eq!(
            "json".parse::<DisplayStrategy>(),
            Err(UnknownVariant::new("display", "json"))
        );
    }

    #[test]
    fn test_name_roundtrip() {
        for strategy in DisplayStrategy::ALL {
            assert_eq!(strategy.to_string().parse(), Ok(strategy));
        }
    }
}
