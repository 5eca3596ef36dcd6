//! Inline Markdown conversion.

use regex::Regex;
use std::sync::LazyLock;

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("static regex must compile"));

/// Convert every `**text**` span into `<strong>text</strong>`.
///
/// Matching is non-greedy in effect: the enclosed text may not contain `*`,
/// so each span ends at the first closing `**`.
pub fn convert_bold(text: &str) -> String {
    BOLD.replace_all(text, "<strong>${1}</strong>").into_owned()
}
