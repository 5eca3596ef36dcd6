//! # resumd
//!
//! Markdown resume parsing and HTML landing page generation for Rust.
//!
//! This library reads a loosely formatted Markdown resume, infers its
//! structure (name, contact block, sections, job entries, bullet lists) and
//! renders the result through a Jinja-style HTML template.
//!
//! ## Quick Start
//!
//! ```no_run
//! use resumd::{parse_file, render};
//!
//! fn main() -> resumd::Result<()> {
//!     // Parse a resume
//!     let doc = parse_file("resume.md")?;
//!
//!     // Render it with the built-in template
//!     let options = render::RenderOptions::default();
//!     let html = render::to_html(&doc, &options)?;
//!     render::save_html(&html, "site/index.html")?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Input format
//!
//! - The first non-blank line is the name (`#` markers are stripped)
//! - The next non-blank line (and the one after it) hold contact details
//! - `## ` headings start sections; a `## Contact` section replaces the
//!   header contact details
//! - `Experience` sections are split into `### Company | Role | Dates` jobs
//! - `- ` bullets, `**bold**` spans and `### ` sub-headings become HTML
//!
//! Parsing never fails on text input; missing structure yields empty fields.

pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Contact, ContactField, Document, Section};
pub use parser::ResumeParser;
pub use render::{JsonFormat, RenderOptions, TemplateEngine};

use std::io::Read;
use std::path::Path;

/// Parse resume text into a structured document.
///
/// # Example
///
/// ```
/// use resumd::parse_str;
///
/// let doc = parse_str("# Jane Doe\njane@example.com\n## Skills\n- Rust");
/// assert_eq!(doc.name, "Jane Doe");
/// assert_eq!(doc.sections.len(), 1);
/// ```
pub fn parse_str(content: &str) -> Document {
    ResumeParser::from_text(content).parse()
}

/// Parse a resume file.
///
/// Fails with [`Error::NotFound`] when the path does not exist.
///
/// # Example
///
/// ```no_run
/// use resumd::parse_file;
///
/// let doc = parse_file("resume.md").unwrap();
/// println!("Sections: {}", doc.section_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let parser = ResumeParser::open(path)?;
    Ok(parser.parse())
}

/// Parse a resume from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    let parser = ResumeParser::from_reader(reader)?;
    Ok(parser.parse())
}

/// Convert a resume file to HTML with the built-in template.
///
/// # Example
///
/// ```no_run
/// use resumd::to_html;
///
/// let html = to_html("resume.md").unwrap();
/// std::fs::write("resume.html", html).unwrap();
/// ```
pub fn to_html<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_html(&doc, &RenderOptions::default())
}

/// Parse `input`, render it with the built-in template and save to `output`.
pub fn generate<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    let html = to_html(input)?;
    render::save_html(&html, output)
}

/// Builder for parsing and rendering resumes.
///
/// # Example
///
/// ```no_run
/// use resumd::Resumd;
///
/// Resumd::new()
///     .with_template_dir("./themes")
///     .with_template("minimal.html")
///     .parse_file("resume.md")?
///     .save_html("site/index.html")?;
/// # Ok::<(), resumd::Error>(())
/// ```
pub struct Resumd {
    render_options: RenderOptions,
}

impl Resumd {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            render_options: RenderOptions::default(),
        }
    }

    /// Set the template name.
    pub fn with_template(mut self, name: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_template(name);
        self
    }

    /// Set the template directory.
    pub fn with_template_dir(mut self, dir: impl Into<std::path::PathBuf>) -> Self {
        self.render_options = self.render_options.with_template_dir(dir);
        self
    }

    /// Parse a resume file and return a result wrapper.
    pub fn parse_file<P: AsRef<Path>>(self, path: P) -> Result<ResumdResult> {
        let document = parse_file(path)?;
        Ok(ResumdResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse resume text.
    pub fn parse_str(self, content: &str) -> ResumdResult {
        ResumdResult {
            document: parse_str(content),
            render_options: self.render_options,
        }
    }
}

impl Default for Resumd {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a resume.
pub struct ResumdResult {
    /// The parsed document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl ResumdResult {
    /// Render to HTML.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.document, &self.render_options)
    }

    /// Render to HTML and save to `output_path`.
    pub fn save_html<P: AsRef<Path>>(&self, output_path: P) -> Result<()> {
        let html = self.to_html()?;
        render::save_html(&html, output_path)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Plain text preview of the parsed data.
    pub fn to_preview(&self) -> String {
        render::to_preview(&self.document)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
