//! Experience section restructuring.

use super::content::process_section_content;

const JOB_MARKER: &str = "### ";
const PROJECTS_MARKER: &str = "**Projects";
const CONTEXT: &str = "experience";

/// Restructure an experience section into job blocks.
///
/// The text is split on `### `; every chunk after the first whose header line
/// contains `|` becomes a job. Lines from the first `**Projects` line onward
/// form the projects part, everything before it the description part. Both
/// parts go through [`process_section_content`].
pub fn process_experience_section(text: &str) -> String {
    let mut jobs = Vec::new();

    for chunk in text.split(JOB_MARKER).skip(1) {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            continue;
        }

        let mut lines = chunk.split('\n');
        let title = lines.next().unwrap_or_default().trim();
        if !title.contains('|') {
            log::debug!("Skipping experience entry without job header: {:?}", title);
            continue;
        }

        jobs.push(render_job(title, lines.collect()));
    }

    jobs.join("\n")
}

fn render_job(title: &str, body: Vec<&str>) -> String {
    let split_at = body
        .iter()
        .position(|line| line.contains(PROJECTS_MARKER))
        .unwrap_or(body.len());
    let (description, projects) = body.split_at(split_at);

    let mut html = format!("<h3>{}</h3>\n", title);

    if !description.is_empty() {
        let content = process_section_content(&description.join("\n"), CONTEXT);
        html.push_str(&format!("<div class=\"job-description\">{}</div>\n", content));
    }

    if !projects.is_empty() {
        let content = process_section_content(&projects.join("\n"), CONTEXT);
        html.push_str(&format!("<div class=\"job-projects\">{}</div>\n", content));
    }

    html
}
