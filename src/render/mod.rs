//! Rendering module for turning parsed resumes into HTML, JSON and text.

mod html;
mod json;
mod options;
mod text;

pub use html::{save_html, to_html, TemplateEngine};
pub use json::{to_json, JsonFormat};
pub use options::{RenderOptions, DEFAULT_TEMPLATE};
pub use text::to_preview;
