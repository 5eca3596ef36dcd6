//! JSON rendering for parsed resumes.

use crate::error::{Error, Result};
use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContactField, Section};

    #[test]
    fn test_to_json_pretty() {
        let mut doc = Document::new();
        doc.name = "Test".to_string();
        doc.add_section(Section::new("Skills", "<ul></ul>"));

        let json = to_json(&doc, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"name\": \"Test\""));
        assert!(json.contains("\"sections\""));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_to_json_compact() {
        let mut doc = Document::new();
        doc.contact.insert(ContactField::Phone, "555-123-4567");

        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n')); // Compact has no newlines
        assert!(json.contains(r#""contact":{"phone":"555-123-4567"}"#));
    }

    #[test]
    fn test_json_round_trip() {
        let mut doc = Document::new();
        doc.name = "Jane".to_string();
        doc.contact.insert(ContactField::Github, "github.com/jane");
        doc.add_section(Section::new("Education", "BSc"));

        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
