//! Identity-header extraction.

use crate::model::ResumeHeader;

use super::classify::LineClassifier;

/// Extract the identity header and locate the first body line.
///
/// The first non-blank line is the candidate's name. The next
/// non-blank line is consulted once: a section header starts the body
/// immediately; a line with contact signals is split into contact
/// items and the body starts after it; any other line is ordinary
/// content and the body starts on that very line.
pub(crate) fn parse_header(
    lines: &[String],
    classifier: &LineClassifier,
) -> (ResumeHeader, usize) {
    let mut header = ResumeHeader::default();

    let first_non_empty = match lines.iter().position(|l| !l.trim().is_empty()) {
        Some(i) => i,
        None => return (header, 0),
    };

    header.name = lines[first_non_empty].trim().to_string();
    let mut body_start = first_non_empty + 1;

    for (i, line) in lines.iter().enumerate().skip(first_non_empty + 1) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if classifier.is_section_header(trimmed) {
            body_start = i;
        } else if classifier.has_contact_info(trimmed) {
            header.contact_items = classifier.split_contacts(trimmed);
            body_start = i + 1;
        } else {
            body_start = i;
        }
        break;
    }

    (header, body_start)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_header_with_contact_line() {
        let c = LineClassifier::new();
        let input = lines(&[
            "Jane Doe",
            "jane@example.com \u{2022} (555) 123-4567",
            "EXPERIENCE",
        ]);
        let (header, body_start) = parse_header(&input, &c);
        assert_eq!(header.name, "Jane Doe");
        assert_eq!(
            header.contact_items,
            vec!["jane@example.com", "(555) 123-4567"]
        );
        assert_eq!(body_start, 2);
    }

    #[test]
    fn test_header_followed_by_section() {
        let c = LineClassifier::new();
        let input = lines(&["Jane Doe", "EXPERIENCE", "Engineer @ Acme"]);
        let (header, body_start) = parse_header(&input, &c);
        assert_eq!(header.name, "Jane Doe");
        assert!(header.contact_items.is_empty());
        assert_eq!(body_start, 1);
    }

    #[test]
    fn test_header_followed_by_plain_line() {
        // A non-contact, non-header line belongs to the body
        let c = LineClassifier::new();
        let input = lines(&["Jane Doe", "Seasoned platform engineer"]);
        let (header, body_start) = parse_header(&input, &c);
        assert_eq!(header.name, "Jane Doe");
        assert!(header.contact_items.is_empty());
        assert_eq!(body_start, 1);
    }

    #[test]
    fn test_header_skips_blank_lines() {
        let c = LineClassifier::new();
        let input = lines(&["", "  ", "Jane Doe", "", "jane@example.com"]);
        let (header, body_start) = parse_header(&input, &c);
        assert_eq!(header.name, "Jane Doe");
        assert_eq!(header.contact_items, vec!["jane@example.com"]);
        assert_eq!(body_start, 5);
    }

    #[test]
    fn test_header_all_blank_input() {
        let c = LineClassifier::new();
        let input = lines(&["", "   "]);
        let (header, body_start) = parse_header(&input, &c);
        assert!(header.name.is_empty());
        assert!(header.contact_items.is_empty());
        assert_eq!(body_start, 0);
    }

    #[test]
    fn test_header_name_only() {
        let c = LineClassifier::new();
        let input = lines(&["Jane Doe"]);
        let (header, body_start) = parse_header(&input, &c);
        assert_eq!(header.name, "Jane Doe");
        assert_eq!(body_start, 1);
    }
}
