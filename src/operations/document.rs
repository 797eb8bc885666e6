//! XML document serializer

use crate::error::ExportError;
use crate::git::FileList;
use crate::system::System;
use anyhow::Result;
use quick_xml::Writer;
use quick_xml::escape::escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;
use std::borrow::Cow;
use std::io;
use std::path::Path;
use tracing::warn;

/// Text of one exported file, or why it could not be read
pub type FileContent = Result<String, io::Error>;

/// Read the content of a listed path
///
/// Returns `None` when the path is not a regular file, so the document can
/// tell a missing file apart from an empty one.
#[must_use]
pub fn read_content(system: &dyn System, source: &Path) -> Option<FileContent> {
    if !system.is_file(source) {
        return None;
    }
    Some(system.read_to_string(source))
}

/// Render an XML document holding every listed path and its text
///
/// Produces a `<files>` root with one `<file path="...">` element per listed
/// path, in list order. Regular files get a `<content>` child with their
/// UTF-8 text; a file that cannot be read or decoded gets a placeholder
/// message instead and the export carries on.
///
/// # Errors
///
/// Returns an error if:
/// - The XML writer fails
pub fn write_document(system: &dyn System, root: &Path, files: &FileList) -> Result<Vec<u8>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_error)?;

    if files.is_empty() {
        writer
            .write_event(Event::Empty(BytesStart::new("files")))
            .map_err(xml_error)?;
        return Ok(writer.into_inner());
    }

    writer
        .write_event(Event::Start(BytesStart::new("files")))
        .map_err(xml_error)?;

    for path in files {
        let content = read_content(system, &root.join(path));
        write_file(&mut writer, path, content).map_err(xml_error)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("files")))
        .map_err(xml_error)?;

    Ok(writer.into_inner())
}

/// Write one `<file>` element
fn write_file<W: io::Write>(
    writer: &mut Writer<W>,
    path: &str,
    content: Option<FileContent>,
) -> io::Result<()> {
    let mut element = BytesStart::new("file");
    let path_value = escape_attribute(path);
    element.push_attribute(Attribute {
        key: QName(b"path"),
        value: Cow::Borrowed(path_value.as_bytes()),
    });

    let Some(content) = content else {
        return writer.write_event(Event::Empty(element));
    };

    let text = content.unwrap_or_else(|e| {
        warn!("Could not read {path}: {e}");
        format!("Error reading file: {e}")
    });

    writer.write_event(Event::Start(element))?;
    if text.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new("content")))?;
    } else {
        writer.write_event(Event::Start(BytesStart::new("content")))?;
        writer.write_event(Event::Text(BytesText::from_escaped(escape_text(&text))))?;
        writer.write_event(Event::End(BytesEnd::new("content")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("file")))
}

/// Escape an attribute value so readers do not normalise its whitespace
///
/// Tabs and line breaks become character references; characters XML cannot
/// carry become U+FFFD.
fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in escape(value).chars() {
        match ch {
            '\t' => escaped.push_str("&#9;"),
            '\n' => escaped.push_str("&#10;"),
            '\r' => escaped.push_str("&#13;"),
            ch if is_xml_char(ch) => escaped.push(ch),
            _ => escaped.push(char::REPLACEMENT_CHARACTER),
        }
    }
    escaped
}

/// Escape element text so carriage returns survive line-end normalisation
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in escape(text).chars() {
        match ch {
            '\r' => escaped.push_str("&#13;"),
            ch if is_xml_char(ch) => escaped.push(ch),
            _ => escaped.push(char::REPLACEMENT_CHARACTER),
        }
    }
    escaped
}

/// Whether `ch` may appear in an XML 1.0 document
const fn is_xml_char(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

fn xml_error(err: io::Error) -> ExportError {
    ExportError::serialization(format!("xml: {err}"))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use crate::system::MockSystem;

    #[test]
    fn test_read_content_of_missing_path() {
        let system = MockSystem::new();
        assert!(read_content(&system, Path::new("/repo/gone.txt")).is_none());
    }

    #[test]
    fn test_read_content_of_directory() {
        let system = MockSystem::new().with_dir("/repo/src").unwrap();
        assert!(read_content(&system, Path::new("/repo/src")).is_none());
    }

    #[test]
    fn test_read_content_failure_is_kept() {
        let system = MockSystem::new()
            .with_file("/repo/latin1.txt", &[0x63, 0x61, 0x66, 0xE9])
            .unwrap();

        let content = read_content(&system, Path::new("/repo/latin1.txt")).unwrap();
        assert!(content.is_err());
    }

    #[test]
    fn test_escape_attribute_keeps_whitespace() {
        assert_eq!(escape_attribute("tab\there\nx"), "tab&#9;here&#10;x");
        assert_eq!(escape_attribute("a&b\r"), "a&amp;b&#13;");
    }

    #[test]
    fn test_escape_text_keeps_carriage_returns() {
        assert_eq!(escape_text("a\r\nb < c"), "a&#13;\nb &lt; c");
        assert_eq!(escape_text("\tindent"), "\tindent");
    }

    #[test]
    fn test_illegal_control_characters_are_replaced() {
        assert_eq!(escape_text("\u{1b}[31mred"), "\u{fffd}[31mred");
        assert_eq!(escape_attribute("bell\u{7}"), "bell\u{fffd}");
    }

    #[test]
    fn test_text_is_not_indented() {
        let system = MockSystem::new()
            .with_file("/repo/a.txt", b"  indented\nline\n")
            .unwrap();
        let files: FileList = ["a.txt"].into_iter().collect();

        let xml = write_document(&system, Path::new("/repo"), &files).unwrap();
        let xml = String::from_utf8(xml).unwrap();

        assert!(xml.contains("<content>  indented\nline\n</content>"));
    }
}
