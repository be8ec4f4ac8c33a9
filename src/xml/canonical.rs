use std::io::Read;
use thiserror::Error;
use xml::reader::{EventReader, ParserConfig, XmlEvent};
use xml::writer::{EmitterConfig, XmlEvent as WriterEvent};

#[derive(Debug, Error)]
/// Failures to re-emit a document
pub enum Error {
    /// Underlying XML writer had an error
    #[error("Could not write XML: {0}")]
    Xml(#[from] xml::writer::Error),
}

/// Lazy sequence of tokens from a possibly truncated document
///
/// Ends at the end of the document, or at the first token the parser
/// cannot read. Neither case is reported to the caller.
pub(crate) struct Tokens<R: Read> {
    reader: EventReader<R>,
    finished: bool,
}

impl<R: Read> Tokens<R> {
    pub(crate) fn new(source: R) -> Tokens<R> {
        let reader = ParserConfig::new()
            .ignore_comments(false)
            .create_reader(source);
        Tokens {
            reader,
            finished: false,
        }
    }
}

impl<R: Read> Iterator for Tokens<R> {
    type Item = XmlEvent;

    fn next(&mut self) -> Option<XmlEvent> {
        if self.finished {
            return None;
        }
        match self.reader.next() {
            Ok(XmlEvent::EndDocument) => {
                self.finished = true;
                tracing::trace!("reached end of document");
                None
            }
            Ok(event) => Some(event),
            Err(e) => {
                self.finished = true;
                tracing::debug!("document ends early, stopped at {}", e);
                None
            }
        }
    }
}

/// Re-emit an XML document indented by two spaces per nesting level
///
/// Whitespace between tags is replaced by the indentation; text content,
/// attribute order, comments and CDATA are kept. An element whose only
/// content is whitespace keeps it as its value, and an empty element is
/// written as a start and end tag pair. If the document is truncated or
/// malformed, everything up to the last complete token is returned
/// without an error.
pub fn canonicalize(markup: &[u8]) -> Result<Vec<u8>, Error> {
    let config = EmitterConfig::new()
        .perform_indent(true)
        .indent_string("  ")
        .normalize_empty_elements(false);
    let mut writer = config.create_writer(Vec::new());

    // Set while nothing but whitespace has followed the last start tag
    let mut leaf_open = false;
    let mut leaf_space = String::new();

    for event in Tokens::new(markup) {
        match event {
            XmlEvent::Whitespace(space) => {
                if leaf_open {
                    leaf_space.push_str(&space);
                }
                continue;
            }
            XmlEvent::EndElement { .. } if leaf_open => {
                // Explicit text keeps the writer from indenting the end tag
                writer.write(WriterEvent::characters(&leaf_space))?;
                leaf_space.clear();
            }
            _ => leaf_space.clear(),
        }
        leaf_open = matches!(event, XmlEvent::StartElement { .. });
        if let Some(event) = event.as_writer_event() {
            writer.write(event)?;
        }
    }

    Ok(writer.into_inner())
}
