//! Error types for resumd library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for resumd operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading resumes or rendering pages.
///
/// Parsing resume text never fails; every variant here comes from the
/// filesystem or the template layer.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The resume file does not exist.
    #[error("Resume file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Source text is not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// The named template is not available.
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// The template failed to render.
    #[error("Template rendering error: {0}")]
    TemplateRender(String),

    /// Error during non-template rendering (JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<minijinja::Error> for Error {
    fn from(err: minijinja::Error) -> Self {
        match err.kind() {
            minijinja::ErrorKind::TemplateNotFound => Error::TemplateNotFound(
                err.detail()
                    .map(str::to_string)
                    .unwrap_or_else(|| err.to_string()),
            ),
            _ => Error::TemplateRender(err.to_string()),
        }
    }
}
