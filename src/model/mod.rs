//! Document model types for parsed resumes.
//!
//! The model is the hand-off point between the Markdown parser and the
//! renderers; it serializes straight into template bindings and JSON.

mod contact;
mod document;

pub use contact::{Contact, ContactField};
pub use document::{Document, Section};
