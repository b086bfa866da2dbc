//! Renderers turning a [`DifferenceResult`] into a report.
//!
//! Three formats exist: plain text, XML and HTML. Which one a destination
//! gets is decided by its suffix, see [`OutputFormat::from_destination`].

pub mod html;
pub mod text;
pub mod xml;

use std::borrow::Cow;
use std::io::{self, Write};
use std::path::Path;

use crate::diff::DifferenceResult;

/// Label used in reports when the first archive has none.
pub const DEFAULT_LABEL1: &str = "filename1.zip";
/// Label used in reports when the second archive has none.
pub const DEFAULT_LABEL2: &str = "filename2.zip";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Html,
    Xml,
}

impl OutputFormat {
    /// `.html` selects HTML, `.xml` selects XML, anything else is text.
    pub fn from_destination(destination: &str) -> Self {
        let lower = destination.to_ascii_lowercase();
        if lower.ends_with(".html") {
            OutputFormat::Html
        } else if lower.ends_with(".xml") {
            OutputFormat::Xml
        } else {
            OutputFormat::Text
        }
    }

    pub fn render<W: Write>(&self, result: &DifferenceResult, out: &mut W) -> io::Result<()> {
        match self {
            OutputFormat::Text => text::render(result, out),
            OutputFormat::Html => html::render(result, out),
            OutputFormat::Xml => xml::render(result, out),
        }
    }

    pub fn render_to_vec(&self, result: &DifferenceResult) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.render(result, &mut buf)?;
        Ok(buf)
    }
}

/// Render `result` and write it to the file at `destination`.
pub async fn write_report(
    result: &DifferenceResult,
    destination: &Path,
    format: OutputFormat,
) -> io::Result<()> {
    let report = format.render_to_vec(result)?;
    tokio::fs::write(destination, report).await
}

fn labels(result: &DifferenceResult) -> (&str, &str) {
    (
        result.label1().unwrap_or(DEFAULT_LABEL1),
        result.label2().unwrap_or(DEFAULT_LABEL2),
    )
}

/// Escape markup-significant characters for XML and HTML text and attributes.
///
/// Characters XML 1.0 cannot carry at all (C0 controls other than tab, newline
/// and carriage return, U+FFFE, U+FFFF) are replaced with U+FFFD.
fn escape(s: &str) -> Cow<'_, str> {
    if !s.chars().any(|c| needs_escape(c) || !is_xml_char(c)) {
        return Cow::Borrowed(s);
    }
    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c if !is_xml_char(c) => escaped.push(char::REPLACEMENT_CHARACTER),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

fn needs_escape(c: char) -> bool {
    matches!(c, '&' | '<' | '>' | '"' | '\'')
}

fn is_xml_char(c: char) -> bool {
    match c {
        '\t' | '\n' | '\r' => true,
        '\u{FFFE}' | '\u{FFFF}' => false,
        c => !c.is_ascii_control() || c == '\u{7F}',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::result::tests::sample_result;

    #[test]
    fn test_format_from_destination() {
        assert_eq!(OutputFormat::from_destination("report.html"), OutputFormat::Html);
        assert_eq!(OutputFormat::from_destination("out/REPORT.XML"), OutputFormat::Xml);
        assert_eq!(OutputFormat::from_destination("report.txt"), OutputFormat::Text);
        assert_eq!(OutputFormat::from_destination("report"), OutputFormat::Text);
        assert_eq!(OutputFormat::from_destination("html"), OutputFormat::Text);
    }

    #[test]
    fn test_escape() {
        assert!(matches!(escape("plain/name.txt"), Cow::Borrowed(_)));
        assert_eq!(escape("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&apos;");
    }

    #[test]
    fn test_escape_replaces_control_characters() {
        assert_eq!(escape("a\u{1}b\u{1F}c"), "a\u{FFFD}b\u{FFFD}c");
        assert_eq!(escape("x\u{FFFE}<"), "x\u{FFFD}&lt;");
        assert!(matches!(escape("tab\there\r\n"), Cow::Borrowed(_)));
        assert!(matches!(escape("caf\u{e9}"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_every_format_renders_something() {
        let result = sample_result();
        for format in [OutputFormat::Text, OutputFormat::Html, OutputFormat::Xml] {
            let bytes = format.render_to_vec(&result).unwrap();
            assert!(!bytes.is_empty(), "{format:?} produced no output");
        }
    }

    #[tokio::test]
    async fn test_write_report() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("report.xml");
        write_report(&sample_result(), &path, OutputFormat::Xml)
            .await
            .unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<?xml"));
    }
}
