//! End-to-end tests for the extraction pipeline.

use std::fs;

use vitae::{
    detect_input_from_path, extract_text, parse_run_dump, parse_structure, process, process_file,
    ExtractOptions, InputKind, PageSegmenter, RunPage, TextRun,
};

/// Two letter-sized pages of a small resume, runs in natural order.
fn resume_pages() -> Vec<RunPage> {
    let page_one = RunPage::new(vec![
        TextRun::new("Jane Doe", 72.0, 720.0, 70.0, 16.0),
        TextRun::new("jane@example.com \u{2022} (555) 123-4567", 72.0, 700.0, 200.0, 10.0),
        TextRun::new("EXPERIENCE", 72.0, 664.0, 80.0, 12.0),
        TextRun::new("Senior Engineer @ Acme Corp", 72.0, 648.0, 180.0, 11.0),
        TextRun::new("Jan 2021 \u{2013} Present", 400.0, 648.0, 110.0, 11.0),
        TextRun::new("\u{2022}", 72.0, 632.0, 6.0, 11.0),
        TextRun::new("Led the billing migration", 84.0, 632.0, 140.0, 11.0),
        TextRun::new("\u{25CF}", 72.0, 616.0, 6.0, 11.0),
        TextRun::new("Cut tail latency by 40%", 84.0, 616.0, 130.0, 11.0),
        TextRun::new("-- 1 of 2 --", 250.0, 560.0, 60.0, 9.0),
    ]);

    let page_two = RunPage::new(vec![
        TextRun::new("EDUCATION", 72.0, 720.0, 75.0, 12.0),
        TextRun::new("B.S. Computer Science", 72.0, 704.0, 140.0, 11.0),
        TextRun::new("Sep 2014 \u{2013} May 2018", 400.0, 704.0, 115.0, 11.0),
        TextRun::new("\u{2022}", 72.0, 688.0, 6.0, 11.0),
        TextRun::new("Dean's List, four semesters", 84.0, 688.0, 150.0, 11.0),
        TextRun::new("-- 2 of 2 --", 250.0, 560.0, 60.0, 9.0),
    ]);

    vec![page_one, page_two]
}

fn expected_text() -> &'static str {
    "Jane Doe\n\
     jane@example.com \u{2022} (555) 123-4567\n\
     \n\
     EXPERIENCE\n\
     Senior Engineer @ Acme Corp  Jan 2021 \u{2013} Present\n\
     \u{2022} Led the billing migration\n\
     \u{2022} Cut tail latency by 40%\n\
     \n\
     EDUCATION\n\
     B.S. Computer Science  Sep 2014 \u{2013} May 2018\n\
     \u{2022} Dean's List, four semesters"
}

#[test]
fn test_two_page_reading_order() {
    assert_eq!(extract_text(&resume_pages()), expected_text());
}

#[test]
fn test_footer_lines_dropped() {
    let text = extract_text(&resume_pages());
    assert!(!text.contains("1 of 2"));
    assert!(!text.contains("2 of 2"));
}

#[test]
fn test_shuffled_runs_reconstruct_same_text() {
    // Extraction order within a page must not matter
    let mut pages = resume_pages();
    for page in &mut pages {
        page.items.reverse();
    }
    assert_eq!(extract_text(&pages), expected_text());
}

#[test]
fn test_parallel_matches_sequential() {
    let pages = resume_pages();
    let parallel = PageSegmenter::new(ExtractOptions::default());
    let sequential = PageSegmenter::new(ExtractOptions::default().sequential());
    assert_eq!(
        parallel.extract_document(&pages),
        sequential.extract_document(&pages)
    );
}

#[test]
fn test_bullet_variants_canonicalized() {
    // The second bullet marker is U+25CF in the dump
    let text = extract_text(&resume_pages());
    assert!(text.contains("\u{2022} Cut tail latency by 40%"));
    assert!(!text.contains('\u{25CF}'));
}

#[test]
fn test_structure_from_pages() {
    let resume = parse_structure(&extract_text(&resume_pages()));

    assert_eq!(resume.header.name, "Jane Doe");
    assert_eq!(
        resume.header.contact_items,
        vec!["jane@example.com", "(555) 123-4567"]
    );

    assert_eq!(resume.sections.len(), 2);

    let experience = &resume.sections[0];
    assert_eq!(experience.heading, "EXPERIENCE");
    assert_eq!(experience.entries.len(), 1);
    assert_eq!(experience.entries[0].title, "Senior Engineer @ Acme Corp");
    assert_eq!(experience.entries[0].date_range, "Jan 2021 \u{2013} Present");
    assert_eq!(
        experience.entries[0].bullets,
        vec!["Led the billing migration", "Cut tail latency by 40%"]
    );

    let education = &resume.sections[1];
    assert_eq!(education.heading, "EDUCATION");
    assert_eq!(education.entries[0].title, "B.S. Computer Science");
    assert_eq!(education.entries[0].date_range, "Sep 2014 \u{2013} May 2018");
    assert_eq!(
        education.entries[0].bullets,
        vec!["Dean's List, four semesters"]
    );
}

#[test]
fn test_process_serialized_dump() {
    let json = serde_json::to_string(&resume_pages()).unwrap();
    let resume = process(&json).unwrap();
    assert_eq!(resume.header.name, "Jane Doe");
    assert_eq!(resume.sections.len(), 2);
    assert_eq!(resume.bullet_count(), 3);
}

#[test]
fn test_run_without_transform_lands_at_origin() {
    let pages = parse_run_dump(r#"[{"items":[{"str":"Loose note","width":50}]}]"#).unwrap();
    assert_eq!(extract_text(&pages), "Loose note");
}

#[test]
fn test_empty_dump() {
    assert_eq!(extract_text(&[]), "");
    let resume = process("[]").unwrap();
    assert!(resume.is_empty());
}

#[test]
fn test_process_file_run_dump() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume-runs.json");
    fs::write(&path, serde_json::to_string(&resume_pages()).unwrap()).unwrap();

    assert_eq!(detect_input_from_path(&path).unwrap(), InputKind::RunDump);

    let resume = process_file(&path).unwrap();
    assert_eq!(resume.header.name, "Jane Doe");
    assert_eq!(resume.sections[1].heading, "EDUCATION");
}

#[test]
fn test_process_file_plain_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.txt");
    fs::write(&path, "Sam Park\nsam@example.com\n\nSKILLS\nRust and Go").unwrap();

    assert_eq!(detect_input_from_path(&path).unwrap(), InputKind::PlainText);

    let resume = process_file(&path).unwrap();
    assert_eq!(resume.header.name, "Sam Park");
    assert_eq!(resume.sections[0].items, vec!["Rust and Go"]);
}
