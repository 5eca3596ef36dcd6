//! Rendering options and configuration.

use std::path::PathBuf;

/// Name of the built-in page template.
pub const DEFAULT_TEMPLATE: &str = "resume.html";

/// Options for rendering a document to HTML.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Template to render
    pub template_name: String,

    /// Directory to load templates from (built-in templates when unset)
    pub template_dir: Option<PathBuf>,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the template name.
    pub fn with_template(mut self, name: impl Into<String>) -> Self {
        self.template_name = name.into();
        self
    }

    /// Set the template directory.
    pub fn with_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dir = Some(dir.into());
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            template_name: DEFAULT_TEMPLATE.to_string(),
            template_dir: None,
        }
    }
}
