//! Plain-text rendering of the resume model.

use crate::model::ResumeData;

/// Render a resume back to editable plain text.
///
/// Inverse of the structural parser: name line, contact items joined
/// with " • ", then each section separated by a blank line with its
/// heading, entries (title and date range split by two spaces),
/// bullets, sub-roles, and flat items in source order. The projection
/// is lossy but stable: re-parsing the output reproduces the same
/// structure.
pub fn to_text(resume: &ResumeData) -> String {
    let mut lines: Vec<String> = Vec::new();

    if !resume.header.name.is_empty() {
        lines.push(resume.header.name.clone());
    }
    if !resume.header.contact_items.is_empty() {
        lines.push(resume.header.contact_items.join(" \u{2022} "));
    }

    for section in &resume.sections {
        lines.push(String::new());
        if !section.heading.is_empty() {
            lines.push(section.heading.clone());
        }

        for entry in &section.entries {
            if entry.date_range.is_empty() {
                lines.push(entry.title.clone());
            } else {
                lines.push(format!("{}  {}", entry.title, entry.date_range));
            }

            for bullet in &entry.bullets {
                lines.push(format!("\u{2022} {}", bullet));
            }

            for sub_role in &entry.sub_roles {
                lines.push(sub_role.title.clone());
                for bullet in &sub_role.bullets {
                    lines.push(format!("\u{2022} {}", bullet));
                }
            }
        }

        for item in &section.items {
            lines.push(item.clone());
        }
    }

    lines.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ResumeBulletEntry, ResumeHeader, ResumeSection, SubRole};

    #[test]
    fn test_to_text_layout() {
        let mut entry = ResumeBulletEntry::new("Engineer @ Acme", "Jan 2020 - Present");
        entry.bullets.push("Shipped it".to_string());
        let mut sub = SubRole::new("Tech Lead | Platform");
        sub.bullets.push("Led it".to_string());
        entry.sub_roles.push(sub);

        let mut section = ResumeSection::new("EXPERIENCE");
        section.entries.push(entry);

        let resume = ResumeData {
            header: ResumeHeader {
                name: "Jane Doe".to_string(),
                contact_items: vec!["jane@example.com".to_string(), "(555) 123-4567".to_string()],
            },
            sections: vec![section],
        };

        let expected = "Jane Doe\n\
                        jane@example.com \u{2022} (555) 123-4567\n\
                        \n\
                        EXPERIENCE\n\
                        Engineer @ Acme  Jan 2020 - Present\n\
                        \u{2022} Shipped it\n\
                        Tech Lead | Platform\n\
                        \u{2022} Led it";
        assert_eq!(to_text(&resume), expected);
    }

    #[test]
    fn test_to_text_entry_without_date() {
        let mut section = ResumeSection::new("PROJECTS");
        section
            .entries
            .push(ResumeBulletEntry::new("Side Project @ Home", ""));

        let resume = ResumeData {
            header: ResumeHeader::with_name("Jane Doe"),
            sections: vec![section],
        };

        assert_eq!(to_text(&resume), "Jane Doe\n\nPROJECTS\nSide Project @ Home");
    }

    #[test]
    fn test_to_text_items_follow_entries() {
        let mut section = ResumeSection::new("SKILLS");
        section.items.push("Rust, Go, Python".to_string());
        section.items.push("Kubernetes".to_string());

        let resume = ResumeData {
            header: ResumeHeader::with_name("Jane Doe"),
            sections: vec![section],
        };

        assert_eq!(
            to_text(&resume),
            "Jane Doe\n\nSKILLS\nRust, Go, Python\nKubernetes"
        );
    }

    #[test]
    fn test_to_text_empty_resume() {
        assert_eq!(to_text(&ResumeData::empty()), "");
    }

    #[test]
    fn test_to_text_unnamed_section_has_no_heading_line() {
        let mut section = ResumeSection::new("");
        section.items.push("Stray line".to_string());

        let resume = ResumeData {
            header: ResumeHeader::with_name("Jane Doe"),
            sections: vec![section],
        };

        assert_eq!(to_text(&resume), "Jane Doe\n\nStray line");
    }
}
