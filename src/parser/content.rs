//! Section body conversion: bullets, bold spans and sub-headings.

use super::inline::convert_bold;

/// Processing flags derived from a section title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionMode {
    /// Title mentions "skill": lists survive blank lines, `###` becomes `<h4>`
    pub skills: bool,
    /// Title mentions "experience": `###` job headers with `|` become `<h3>`
    pub experience: bool,
}

impl SectionMode {
    /// Derive the mode from a section title, ignoring case.
    pub fn from_title(title: &str) -> Self {
        let lower = title.to_lowercase();
        Self {
            skills: lower.contains("skill"),
            experience: lower.contains("experience"),
        }
    }
}

/// Convert a section body into HTML fragments.
///
/// `- ` lines become `<li>` items inside `<ul>`, indented or unmarked lines
/// directly after a bullet continue it, `**bold**` becomes `<strong>`, and
/// `### ` headings are converted according to the section title. Blank lines
/// are kept as formatting signals.
pub fn process_section_content(text: &str, section_title: &str) -> String {
    let mut processor = ContentProcessor::new(SectionMode::from_title(section_title));
    for line in text.split('\n') {
        processor.push_line(line);
    }
    processor.finish()
}

struct ContentProcessor {
    mode: SectionMode,
    output: Vec<String>,
    bullet: Option<String>,
    in_list: bool,
}

impl ContentProcessor {
    fn new(mode: SectionMode) -> Self {
        Self {
            mode,
            output: Vec::new(),
            bullet: None,
            in_list: false,
        }
    }

    fn push_line(&mut self, line: &str) {
        let trimmed = line.trim();

        if let Some(heading) = trimmed.strip_prefix("### ") {
            self.flush_bullet();
            self.close_list();
            let heading = heading.trim();
            if heading.contains('|') && self.mode.experience {
                self.output.push(format!("<h3>{}</h3>", heading));
            } else if self.mode.skills {
                self.output.push(format!("<h4>{}</h4>", heading));
            } else {
                self.output.push(line.to_string());
            }
        } else if let Some(item) = trimmed.strip_prefix("- ") {
            self.flush_bullet();
            self.open_list();
            self.bullet = Some(item.trim().to_string());
        } else if trimmed.is_empty() {
            self.flush_bullet();
            if !self.mode.skills {
                self.close_list();
            }
            if !(self.mode.skills && self.in_list) {
                self.output.push(String::new());
            }
        } else if let Some(bullet) = self.bullet.as_mut() {
            bullet.push(' ');
            bullet.push_str(trimmed);
        } else {
            self.close_list();
            self.output.push(convert_bold(line));
        }
    }

    fn finish(mut self) -> String {
        self.flush_bullet();
        self.close_list();
        self.output.join("\n")
    }

    fn flush_bullet(&mut self) {
        if let Some(bullet) = self.bullet.take() {
            if !bullet.is_empty() {
                self.output.push(format!("<li>{}</li>", convert_bold(&bullet)));
            }
        }
    }

    fn open_list(&mut self) {
        if !self.in_list {
            self.output.push("<ul>".to_string());
            self.in_list = true;
        }
    }

    fn close_list(&mut self) {
        if self.in_list {
            self.output.push("</ul>".to_string());
            self.in_list = false;
        }
    }
}
