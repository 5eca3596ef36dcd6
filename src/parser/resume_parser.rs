//! Line-oriented Markdown resume parser.

use std::io::{self, Read};
use std::iter::Peekable;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{Contact, Document, Section};

use super::contact::extract_contact;
use super::content::process_section_content;
use super::experience::process_experience_section;

/// Markdown resume parser.
///
/// Holds the source text; [`ResumeParser::parse`] is a pure function of it
/// and may be called any number of times.
pub struct ResumeParser {
    source: String,
}

impl ResumeParser {
    /// Open a resume file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::NotFound(path.to_path_buf()));
        }

        let data = std::fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
            _ => Error::Io(e),
        })?;
        log::info!("Read resume {} ({} bytes)", path.display(), data.len());

        Self::from_bytes(&data)
    }

    /// Create a parser over resume text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            source: text.into(),
        }
    }

    /// Create a parser over UTF-8 encoded bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(data).map_err(|e| Error::Encoding(e.to_string()))?;
        Ok(Self::from_text(text))
    }

    /// Create a parser from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// The source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parse the resume and return a structured Document.
    ///
    /// Never fails: text without recognizable structure yields empty fields.
    pub fn parse(&self) -> Document {
        let mut builder = DocumentBuilder::default();
        let mut lines = self.source.split('\n').peekable();
        let mut state = ScanState::Header;

        while let Some(line) = lines.next() {
            state = state.advance(line, &mut lines, &mut builder);
        }

        if let ScanState::InSection { title, lines } = state {
            builder.close_section(title, lines);
        }

        builder.build()
    }
}

/// Scanner position within the resume.
#[derive(Debug)]
enum ScanState {
    /// Waiting for the name line.
    Header,
    /// Between the name and the first `## ` heading.
    ContactZone { captured: bool },
    /// Collecting the raw lines of a `## ` section.
    InSection { title: String, lines: Vec<String> },
}

impl ScanState {
    fn advance<'a, I>(
        self,
        line: &'a str,
        rest: &mut Peekable<I>,
        builder: &mut DocumentBuilder,
    ) -> ScanState
    where
        I: Iterator<Item = &'a str>,
    {
        let trimmed = line.trim();

        match self {
            ScanState::Header => {
                if trimmed.is_empty() {
                    return ScanState::Header;
                }
                let name = trimmed.trim_start_matches(['#', ' ']).trim();
                if name.is_empty() {
                    return ScanState::Header;
                }
                log::debug!("Resume name: {:?}", name);
                builder.name = name.to_string();
                ScanState::ContactZone { captured: false }
            }
            ScanState::ContactZone { captured } => {
                if let Some(title) = section_title(trimmed) {
                    return ScanState::open(title);
                }
                if trimmed.is_empty() || is_heading_like(trimmed) {
                    return ScanState::ContactZone { captured };
                }
                if captured {
                    log::debug!("Ignoring extra contact line: {:?}", trimmed);
                    return ScanState::ContactZone { captured };
                }

                let mut contact = extract_contact(trimmed);
                if let Some(next) = rest.peek().map(|next| next.trim()) {
                    if !next.is_empty() && !is_heading_like(next) {
                        contact.merge(extract_contact(next));
                    }
                }
                log::debug!("Captured {} contact fields from header", contact.len());
                builder.contact = contact;
                ScanState::ContactZone { captured: true }
            }
            ScanState::InSection { title, mut lines } => {
                if let Some(next_title) = section_title(trimmed) {
                    builder.close_section(title, lines);
                    return ScanState::open(next_title);
                }
                lines.push(line.to_string());
                ScanState::InSection { title, lines }
            }
        }
    }

    fn open(title: &str) -> ScanState {
        log::debug!("Opening section {:?}", title);
        ScanState::InSection {
            title: title.to_string(),
            lines: Vec::new(),
        }
    }
}

/// Title of a `## ` heading line, if the trimmed line is one.
fn section_title(trimmed: &str) -> Option<&str> {
    trimmed.strip_prefix("## ").map(str::trim)
}

/// Lines that never count as contact details (`##`, `###`, ...).
fn is_heading_like(trimmed: &str) -> bool {
    trimmed.starts_with("##")
}

/// Accumulates parse results before they are frozen into a [`Document`].
#[derive(Default)]
struct DocumentBuilder {
    name: String,
    contact: Contact,
    sections: Vec<Section>,
}

impl DocumentBuilder {
    fn close_section(&mut self, title: String, lines: Vec<String>) {
        let text = lines.join("\n");
        let text = text.trim();
        let lower = title.to_lowercase();

        if lower == "contact" {
            log::debug!("Contact section replaces header contact details");
            self.contact = extract_contact(text);
            return;
        }

        let content = if lower.contains("experience") {
            process_experience_section(text)
        } else if lower.contains("interest") || lower.contains("area") {
            text.to_string()
        } else {
            process_section_content(text, &title)
        };

        log::debug!("Closed section {:?} ({} bytes)", title, content.len());
        self.sections.push(Section { title, content });
    }

    fn build(self) -> Document {
        Document {
            name: self.name,
            title: String::new(),
            contact: self.contact,
            summary: String::new(),
            sections: self.sections,
        }
    }
}
