//! Command parsing and the sequential command runner.
//!
//! A run takes a [`Book`] and an ordered list of `(command, variant)` pairs.
//! Each pair selects a strategy on a fresh [`BookService`] and invokes it
//! immediately. The first invalid pair aborts the run; console output from
//! earlier pairs has already been written by then.
//!
//! Only the output of the last `serialize` command is returned.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use tracing::{debug, warn};

use crate::book::Book;
use crate::error::{Error, Result};
use crate::service::BookService;
use crate::strategy::{DisplayStrategy, PrintStrategy, SerializeFormat};

/// The sequence run by the command-line driver when no commands are given.
pub const DEFAULT_COMMANDS: [(&str, &str); 2] = [("display", "reverse"), ("serialize", "xml")];

/// A resolved `(command, variant)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Display(DisplayStrategy),
    Print(PrintStrategy),
    Serialize(SerializeFormat),
}

impl Command {
    /// Resolve a command name and variant name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCommand`] if the command is not one of
    /// `display`, `print`, `serialize`, or the variant does not belong to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookstrat::{Command, Error};
    /// use bookstrat::strategy::SerializeFormat;
    ///
    /// assert_eq!(
    ///     Command::parse("serialize", "json").unwrap(),
    ///     Command::Serialize(SerializeFormat::Json)
    /// );
    /// assert!(matches!(
    ///     Command::parse("display", "json"),
    ///     Err(Error::InvalidCommand { .. })
    /// ));
    /// ```
    pub fn parse(command: &str, variant: &str) -> Result<Self> {
        let parsed = match command {
            "display" => variant.parse().map(Self::Display).ok(),
            "print" => variant.parse().map(Self::Print).ok(),
            "serialize" => variant.parse().map(Self::Serialize).ok(),
            _ => None,
        };
        parsed.ok_or_else(|| Error::invalid_command(command, variant))
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Display(_) => "display",
            Self::Print(_) => "print",
            Self::Serialize(_) => "serialize",
        }
    }

    pub fn variant(self) -> &'static str {
        match self {
            Self::Display(s) => s.name(),
            Self::Print(s) => s.name(),
            Self::Serialize(f) => f.name(),
        }
    }
}

/// Parses the compact `command:variant` form used on the command line.
impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once(':') {
            Some((command, variant)) => Self::parse(command, variant),
            None => Err(Error::invalid_command(s, "")),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name(), self.variant())
    }
}

/// Run `commands` against `book`, writing console output to stdout.
///
/// # Errors
///
/// See [`run_with_writer`].
pub fn run<I, C, V>(book: &Book, commands: I) -> Result<Option<String>>
where
    I: IntoIterator<Item = (C, V)>,
    C: AsRef<str>,
    V: AsRef<str>,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = run_with_writer(book, commands, &mut out)?;
    out.flush()?;
    Ok(result)
}

/// Run `commands` against `book`, writing console output to `out`.
///
/// Returns the output of the last `serialize` command, or `None` if no
/// serialize command ran.
///
/// # Errors
///
/// Returns [`Error::InvalidCommand`] for the first pair that does not
/// resolve; later pairs are not run. Returns [`Error::Io`] if writing to
/// `out` fails.
pub fn run_with_writer<I, C, V, W>(book: &Book, commands: I, out: &mut W) -> Result<Option<String>>
where
    I: IntoIterator<Item = (C, V)>,
    C: AsRef<str>,
    V: AsRef<str>,
    W: Write + ?Sized,
{
    let mut service = BookService::new();
    let mut result = None;

    for (index, (command, variant)) in commands.into_iter().enumerate() {
        let (command, variant) = (command.as_ref(), variant.as_ref());
        let resolved = Command::parse(command, variant).inspect_err(|_| {
            warn!(index, command, variant, "invalid command");
        })?;
        debug!(index, command = %resolved, "dispatching");

        match resolved {
            Command::Display(strategy) => {
                service.set_display_strategy(strategy);
                service.display(book, out)?;
            }
            Command::Print(strategy) => {
                service.set_print_strategy(strategy);
                service.print_book(book, out)?;
            }
            Command::Serialize(format) => {
                service.set_serialize_format(format);
                result = Some(service.serialize(book));
            }
        }
    }

    Ok(result)
}
