//! Plain text preview of a parsed resume.

use crate::model::Document;

const SUMMARY_PREVIEW_CHARS: usize = 100;
const SECTION_PREVIEW_CHARS: usize = 80;

/// Summarize a document for a quick look at what the parser found.
///
/// Lists the name, title, contact fields, a summary excerpt and every
/// section with the start of its content on a single line.
pub fn to_preview(doc: &Document) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Name: {}", or_na(&doc.name)));
    lines.push(format!("Title: {}", or_na(&doc.title)));

    if !doc.contact.is_empty() {
        lines.push(String::new());
        lines.push("Contact Information:".to_string());
        for (field, value) in doc.contact.iter() {
            lines.push(format!("  {}: {}", field.label(), value));
        }
    }

    if !doc.summary.is_empty() {
        lines.push(String::new());
        lines.push(format!(
            "Summary: {}...",
            excerpt(&doc.summary, SUMMARY_PREVIEW_CHARS)
        ));
    }

    if !doc.sections.is_empty() {
        lines.push(String::new());
        lines.push(format!("Sections ({}):", doc.sections.len()));
        for section in &doc.sections {
            let preview = excerpt(&section.content, SECTION_PREVIEW_CHARS).replace('\n', " ");
            lines.push(format!("  • {}: {}...", section.title, preview));
        }
    }

    lines.join("\n")
}

fn or_na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}

fn excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
