//! JSON and XML rendering of a [`Book`].
//!
//! Both encoders write into an in-memory buffer, so the only failure modes
//! of the underlying writers are unreachable and the public functions are
//! total.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};

use super::UnknownVariant;
use crate::book::Book;

/// Structured text format a book is serialized to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SerializeFormat {
    Json,
    Xml,
}

impl SerializeFormat {
    pub const ALL: [Self; 2] = [Self::Json, Self::Xml];

    pub fn name(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }

    pub fn serialize(self, book: &Book) -> String {
        match self {
            Self::Json => to_json(book),
            Self::Xml => to_xml(book),
        }
    }
}

impl FromStr for SerializeFormat {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| UnknownVariant::new("serialize", s))
    }
}

impl fmt::Display for SerializeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Serialize a book as a single-line JSON object.
///
/// Keys are emitted as `title` then `content`, separated by `", "` with
/// `": "` between key and value. Non-ASCII characters are written as
/// `\uXXXX` escapes so the output is pure ASCII.
///
/// # Examples
///
/// ```
/// use bookstrat::Book;
/// use bookstrat::strategy::to_json;
///
/// let book = Book::new("Café", "a \"quoted\" line");
/// assert_eq!(
///     to_json(&book),
///     r#"{"title": "Caf\u00e9", "content": "a \"quoted\" line"}"#
/// );
/// ```
pub fn to_json(book: &Book) -> String {
    let mut ser = Serializer::with_formatter(Vec::new(), SpacedAsciiFormatter);
    book.serialize(&mut ser)
        .expect("serializing string fields into memory cannot fail");
    String::from_utf8_lossy(&ser.into_inner()).into_owned()
}

/// Serialize a book as `<book><title>..</title><content>..</content></book>`.
///
/// Text is escaped for `&`, `<` and `>` only. No XML declaration or
/// indentation is written.
///
/// # Examples
///
/// ```
/// use bookstrat::Book;
/// use bookstrat::strategy::to_xml;
///
/// let book = Book::new("Tom & Jerry", "1 < 2");
/// assert_eq!(
///     to_xml(&book),
///     "<book><title>Tom &amp; Jerry</title><content>1 &lt; 2</content></book>"
/// );
/// ```
pub fn to_xml(book: &Book) -> String {
    let mut writer = Writer::new(Vec::new());
    write_book_xml(&mut writer, book).expect("writing XML into memory cannot fail");
    String::from_utf8_lossy(&writer.into_inner()).into_owned()
}

fn write_book_xml<W: Write>(writer: &mut Writer<W>, book: &Book) -> io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new("book")))?;
    write_text_element(writer, "title", book.title())?;
    write_text_element(writer, "content", book.content())?;
    writer.write_event(Event::End(BytesEnd::new("book")))
}

fn write_text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    if !text.is_empty() {
        writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))?;
    }
    writer.write_event(Event::End(BytesEnd::new(name)))
}

/// Compact JSON with spaced separators and ASCII-only strings.
struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    // Control characters below 0x20 arrive through `write_char_escape`;
    // everything else that is not printable ASCII is escaped here.
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut units = [0u16; 2];
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if c.is_ascii() && c != '\x7f' {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..i])?;
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}
