//! Contact details.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The fixed vocabulary of contact fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    /// Email address
    Email,
    /// Phone number
    Phone,
    /// GitHub profile
    Github,
    /// LinkedIn profile
    Linkedin,
    /// Personal website or portfolio
    Website,
    /// Free-form location
    Location,
}

impl ContactField {
    /// All fields in display order.
    pub const ALL: [ContactField; 6] = [
        ContactField::Email,
        ContactField::Phone,
        ContactField::Github,
        ContactField::Linkedin,
        ContactField::Website,
        ContactField::Location,
    ];

    /// Key used in serialized output and templates.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Github => "github",
            ContactField::Linkedin => "linkedin",
            ContactField::Website => "website",
            ContactField::Location => "location",
        }
    }

    /// Capitalized label for human-readable output.
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Email => "Email",
            ContactField::Phone => "Phone",
            ContactField::Github => "Github",
            ContactField::Linkedin => "Linkedin",
            ContactField::Website => "Website",
            ContactField::Location => "Location",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contact details keyed by field.
///
/// Each field appears at most once and never holds an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Contact {
    fields: BTreeMap<ContactField, String>,
}

impl Contact {
    /// Create empty contact details.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a field value.
    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// Check whether a field is set.
    pub fn contains(&self, field: ContactField) -> bool {
        self.fields.contains_key(&field)
    }

    /// Set a field, replacing any previous value. Empty values are ignored.
    pub fn insert(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            return;
        }
        self.fields.insert(field, value);
    }

    /// Copy every field of `other` into `self`; `other` wins on conflicts.
    pub fn merge(&mut self, other: Contact) {
        self.fields.extend(other.fields);
    }

    /// Number of fields set.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check whether no field is set.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over set fields in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &str)> {
        self.fields.iter().map(|(field, value)| (*field, value.as_str()))
    }
}
