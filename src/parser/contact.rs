//! Contact field extraction.

use crate::model::{Contact, ContactField};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b")
        .expect("static regex must compile")
});

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+?[1-9]?[0-9]{3}[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}")
        .expect("static regex must compile")
});

static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[|,\n]").expect("static regex must compile"));

static LEADING_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d").expect("static regex must compile"));

/// Extract contact fields from a fragment of text.
///
/// The fragment may hold several items separated by `|`, `,` or newlines.
/// Email and phone are matched anywhere in the text; every other field is
/// classified per separated piece, with later pieces overwriting earlier
/// ones, except `location` which keeps its first value.
pub fn extract_contact(text: &str) -> Contact {
    let mut contact = Contact::new();

    let email = EMAIL.find(text).map(|m| m.as_str());
    if let Some(email) = email {
        contact.insert(ContactField::Email, email);
    }

    let phone = PHONE.find(text).map(|m| m.as_str());
    if let Some(phone) = phone {
        contact.insert(ContactField::Phone, phone);
    }

    for piece in SEPARATOR.split(text) {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }

        let lower = piece.to_lowercase();
        if lower.contains("github.com") {
            contact.insert(ContactField::Github, piece);
        } else if lower.contains("linkedin.com") {
            contact.insert(ContactField::Linkedin, piece);
        } else if is_url(piece) && !piece.contains("github") && !piece.contains("linkedin") {
            contact.insert(ContactField::Website, piece);
        } else if Some(piece) != phone
            && Some(piece) != email
            && !contact.contains(ContactField::Location)
            && !LEADING_DIGIT.is_match(piece)
        {
            contact.insert(ContactField::Location, piece);
        }
    }

    contact
}

fn is_url(piece: &str) -> bool {
    piece.starts_with("http://") || piece.starts_with("https://")
}
