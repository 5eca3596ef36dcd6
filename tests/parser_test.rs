//! Integration tests for resume parsing.

use std::fs;

use resumd::parser::{process_section_content, ResumeParser};
use resumd::{parse_file, parse_str, ContactField, Error};

const SAMPLE_RESUME: &str = "\
# Jane Doe
jane@example.com | +1 555-123-4567 | github.com/janedoe
https://www.linkedin.com/in/janedoe | https://janedoe.dev

## Summary
Backend engineer who likes **fast** systems.

## Experience
### Acme Corp | Senior Engineer | 2021 - Present
Own the billing platform.
- Cut invoice latency by **40%**
  across all regions
- Mentored three engineers

**Projects:**
- Ledger rewrite in Rust

### Globex | Engineer | 2018 - 2021
- Built the search indexer

### Volunteering
- Not a job header

## Technical Skills
### Languages
- Rust, Go

- Python

### Tools
- Docker

## Areas of Interest
Distributed systems, **compilers**

## Contact
jane@example.com
Lisbon, Portugal
";

#[test]
fn test_sample_resume_name_and_contact() {
    let doc = parse_str(SAMPLE_RESUME);

    assert_eq!(doc.name, "Jane Doe");
    assert!(doc.title.is_empty());
    assert!(doc.summary.is_empty());

    // The Contact section replaces the header contact details entirely.
    assert_eq!(doc.contact.get(ContactField::Email), Some("jane@example.com"));
    assert_eq!(doc.contact.get(ContactField::Location), Some("Lisbon"));
    assert!(!doc.contact.contains(ContactField::Github));
    assert!(!doc.contact.contains(ContactField::Phone));
}

#[test]
fn test_sample_resume_sections_in_order() {
    let doc = parse_str(SAMPLE_RESUME);
    assert_eq!(
        doc.section_titles(),
        vec!["Summary", "Experience", "Technical Skills", "Areas of Interest"]
    );
    assert!(doc.section("contact").is_none());
}

#[test]
fn test_sample_resume_experience() {
    let doc = parse_str(SAMPLE_RESUME);
    let content = &doc.section("Experience").unwrap().content;

    assert_eq!(content.matches("<h3>").count(), 2);
    assert!(content.contains("<h3>Acme Corp | Senior Engineer | 2021 - Present</h3>"));
    assert!(content.contains("<h3>Globex | Engineer | 2018 - 2021</h3>"));
    assert!(content.contains("<li>Cut invoice latency by <strong>40%</strong> across all regions</li>"));
    assert!(content.contains(
        "<div class=\"job-projects\"><strong>Projects:</strong>\n<ul>\n<li>Ledger rewrite in Rust</li>\n</ul></div>"
    ));
    assert!(!content.contains("Volunteering"));
    assert!(!content.contains("Not a job header"));
}

#[test]
fn test_sample_resume_skills_single_list_per_group() {
    let doc = parse_str(SAMPLE_RESUME);
    let content = &doc.section("Technical Skills").unwrap().content;

    assert_eq!(
        content,
        "<h4>Languages</h4>\n<ul>\n<li>Rust, Go</li>\n<li>Python</li>\n</ul>\n\
         <h4>Tools</h4>\n<ul>\n<li>Docker</li>\n</ul>"
    );
}

#[test]
fn test_sample_resume_raw_and_generic_sections() {
    let doc = parse_str(SAMPLE_RESUME);

    assert_eq!(
        doc.section("Areas of Interest").unwrap().content,
        "Distributed systems, **compilers**"
    );
    assert_eq!(
        doc.section("Summary").unwrap().content,
        "Backend engineer who likes <strong>fast</strong> systems."
    );
}

#[test]
fn test_header_contact_without_contact_section() {
    let doc = parse_str(
        "# Jane Doe\nemail@x.com | +1 555-123-4567 | github.com/janedoe\n\n## Skills\n- Rust",
    );
    assert_eq!(doc.contact.get(ContactField::Email), Some("email@x.com"));
    assert_eq!(doc.contact.get(ContactField::Phone), Some("555-123-4567"));
    assert_eq!(doc.contact.get(ContactField::Github), Some("github.com/janedoe"));
}

#[test]
fn test_header_contact_second_line_merges() {
    let doc = parse_str(SAMPLE_RESUME.split("## Contact").next().unwrap());
    assert_eq!(doc.contact.get(ContactField::Github), Some("github.com/janedoe"));
    assert_eq!(
        doc.contact.get(ContactField::Linkedin),
        Some("https://www.linkedin.com/in/janedoe")
    );
    assert_eq!(doc.contact.get(ContactField::Website), Some("https://janedoe.dev"));
}

#[test]
fn test_contact_section_first_is_still_excluded() {
    let doc = parse_str("# Jane\n## Contact\nBerlin\n## Education\nBSc");
    assert_eq!(doc.section_titles(), vec!["Education"]);
    assert_eq!(doc.contact.get(ContactField::Location), Some("Berlin"));
}

#[test]
fn test_bullet_in_generic_section() {
    let doc = parse_str("# Jane\n## Projects\n- Built **X** system");
    assert_eq!(
        doc.sections[0].content,
        "<ul>\n<li>Built <strong>X</strong> system</li>\n</ul>"
    );
}

#[test]
fn test_skills_output_reprocessing_is_stable() {
    let doc = parse_str("# Jane\n## Skills\n- Rust\n\n- Go");
    let content = &doc.sections[0].content;
    assert!(!content.contains("</ul>\n<ul>"));
    assert_eq!(&process_section_content(content, "Skills"), content);
}

#[test]
fn test_parse_is_deterministic() {
    assert_eq!(parse_str(SAMPLE_RESUME), parse_str(SAMPLE_RESUME));
}

#[test]
fn test_empty_and_blank_input() {
    for input in ["", "\n\n", "   \n\t\n"] {
        let doc = parse_str(input);
        assert!(doc.is_empty(), "{:?}", input);
    }
}

#[test]
fn test_windows_line_endings() {
    let doc = parse_str("# Jane Doe\r\njane@example.com\r\n## Skills\r\n- Rust\r\n");
    assert_eq!(doc.name, "Jane Doe");
    assert_eq!(doc.contact.get(ContactField::Email), Some("jane@example.com"));
    assert_eq!(doc.sections[0].title, "Skills");
    assert_eq!(doc.sections[0].content, "<ul>\n<li>Rust</li>\n</ul>");
}

#[test]
fn test_parse_file_reads_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.md");
    fs::write(&path, "# José Müller\n## Skills\n- Rust").unwrap();

    let doc = parse_file(&path).unwrap();
    assert_eq!(doc.name, "José Müller");
    assert_eq!(doc.section_count(), 1);
}

#[test]
fn test_parse_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.md");

    match parse_file(&path) {
        Err(Error::NotFound(missing)) => assert_eq!(missing, path),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_parse_file_invalid_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.md");
    fs::write(&path, [0x23, 0x20, 0xC3, 0x28]).unwrap();

    assert!(matches!(ResumeParser::open(&path), Err(Error::Encoding(_))));
}
