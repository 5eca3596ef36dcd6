//! HTML rendering through Jinja-style templates.

use std::fs;
use std::path::Path;

use minijinja::{Environment, ErrorKind};

use crate::error::{Error, Result};
use crate::model::Document;

use super::RenderOptions;

/// Templates compiled into the crate.
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[(
    super::options::DEFAULT_TEMPLATE,
    include_str!("../../templates/resume.html"),
)];

fn builtin_template(name: &str) -> Option<&'static str> {
    BUILTIN_TEMPLATES
        .iter()
        .find(|(builtin, _)| *builtin == name)
        .map(|(_, source)| *source)
}

/// Convert a document to HTML.
pub fn to_html(doc: &Document, options: &RenderOptions) -> Result<String> {
    let engine = TemplateEngine::from_options(options);
    engine.render(doc, &options.template_name)
}

/// Write rendered HTML to `output_path`, creating parent directories.
pub fn save_html<P: AsRef<Path>>(html: &str, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(output_path, html)?;
    log::info!("Saved {} bytes to {}", html.len(), output_path.display());
    Ok(())
}

/// Template engine that turns a [`Document`] into an HTML page.
///
/// Document fields (`name`, `title`, `contact`, `summary`, `sections`) are
/// exposed as top-level template variables. Templates ending in `.html`,
/// `.htm` or `.xml` are autoescaped, so pre-rendered section content has to
/// be marked `|safe`.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create an engine serving the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_loader(|name| Ok(builtin_template(name).map(str::to_string)));
        Self { env }
    }

    /// Create an engine loading templates from `dir`.
    ///
    /// Built-in templates are used for names the directory does not provide.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref().to_path_buf();
        log::debug!("Loading templates from {}", dir.display());

        let dir_loader = minijinja::path_loader(dir);
        let mut env = Environment::new();
        env.set_loader(move |name| match dir_loader(name)? {
            Some(source) => Ok(Some(source)),
            None => Ok(builtin_template(name).map(str::to_string)),
        });
        Self { env }
    }

    /// Create an engine for the given render options.
    pub fn from_options(options: &RenderOptions) -> Self {
        match options.template_dir {
            Some(ref dir) => Self::from_dir(dir),
            None => Self::new(),
        }
    }

    /// Render a document with the named template.
    pub fn render(&self, doc: &Document, template_name: &str) -> Result<String> {
        let template = self
            .env
            .get_template(template_name)
            .map_err(|e| match e.kind() {
                ErrorKind::TemplateNotFound => Error::TemplateNotFound(template_name.to_string()),
                _ => Error::from(e),
            })?;

        let html = template.render(doc)?;
        log::debug!(
            "Rendered {} with {} sections ({} bytes)",
            template_name,
            doc.sections.len(),
            html.len()
        );
        Ok(html)
    }

    /// Write rendered HTML to `output_path`, creating parent directories.
    pub fn save<P: AsRef<Path>>(&self, html: &str, output_path: P) -> Result<()> {
        save_html(html, output_path)
    }

    /// Render a document and write the result to `output_path`.
    pub fn render_and_save<P: AsRef<Path>>(
        &self,
        doc: &Document,
        output_path: P,
        template_name: &str,
    ) -> Result<()> {
        let html = self.render(doc, template_name)?;
        self.save(&html, output_path)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}
