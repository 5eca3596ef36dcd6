//! Markdown resume parsing module.

mod contact;
mod content;
mod experience;
mod inline;
mod resume_parser;

pub use contact::extract_contact;
pub use content::{process_section_content, SectionMode};
pub use experience::process_experience_section;
pub use inline::convert_bold;
pub use resume_parser::ResumeParser;
