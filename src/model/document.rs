//! Document-level types.

use super::Contact;
use serde::{Deserialize, Serialize};

/// A parsed resume.
///
/// Built fresh by every parse call and owned by the caller. The field names
/// double as the top-level bindings exposed to HTML templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// The person's name (first non-blank line, `#` markers stripped)
    pub name: String,

    /// Reserved headline field; the parser never fills it
    pub title: String,

    /// Contact details from the header block or a `## Contact` section
    pub contact: Contact,

    /// Reserved summary field; the parser never fills it
    pub summary: String,

    /// `##` sections in document order, excluding `Contact`
    pub sections: Vec<Section>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a section to the end of the document.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Find a section by title, ignoring case.
    pub fn section(&self, title: &str) -> Option<&Section> {
        let wanted = title.to_lowercase();
        self.sections
            .iter()
            .find(|section| section.title.to_lowercase() == wanted)
    }

    /// Section titles in document order.
    pub fn section_titles(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.title.as_str()).collect()
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Check whether nothing at all was extracted.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.title.is_empty()
            && self.summary.is_empty()
            && self.contact.is_empty()
            && self.sections.is_empty()
    }
}

/// One `## `-headed block of the resume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Heading text without the `## ` marker
    pub title: String,

    /// Processed HTML fragment
    pub content: String,
}

impl Section {
    /// Create a new section.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}
