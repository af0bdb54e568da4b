//! The stateful structural scan over assembled plain text.

use log::debug;

use crate::model::{ResumeBulletEntry, ResumeData, ResumeSection, SubRole};

use super::classify::LineClassifier;
use super::header::parse_header;

/// Open builders for the containers the scan is currently filling.
///
/// At most one section, one entry, and one sub-role are open at a
/// time, and a sub-role is only ever open while its entry is. Flushing
/// attaches the innermost builder to its parent and clears it; every
/// flush runs innermost-first so nothing is dropped on a transition.
#[derive(Default)]
struct Accumulator {
    sections: Vec<ResumeSection>,
    section: Option<ResumeSection>,
    entry: Option<ResumeBulletEntry>,
    sub_role: Option<SubRole>,
}

impl Accumulator {
    fn flush_sub_role(&mut self) {
        if let Some(entry) = self.entry.as_mut() {
            if let Some(sub_role) = self.sub_role.take() {
                entry.sub_roles.push(sub_role);
            }
        }
    }

    fn flush_entry(&mut self) {
        self.flush_sub_role();
        if let Some(section) = self.section.as_mut() {
            if let Some(entry) = self.entry.take() {
                section.entries.push(entry);
            }
        }
    }

    fn flush_section(&mut self) {
        self.flush_entry();
        if let Some(section) = self.section.take() {
            self.sections.push(section);
        }
    }

    fn open_section(&mut self, heading: String) {
        self.flush_section();
        self.section = Some(ResumeSection::new(heading));
    }

    /// Content seen before any heading goes into an unnamed section.
    fn ensure_section(&mut self) {
        if self.section.is_none() {
            self.section = Some(ResumeSection::new(""));
        }
    }

    fn open_entry(&mut self, title: String, date_range: String) {
        self.flush_entry();
        self.entry = Some(ResumeBulletEntry::new(title, date_range));
    }

    fn open_sub_role(&mut self, title: String) {
        self.flush_sub_role();
        self.sub_role = Some(SubRole::new(title));
    }

    fn has_open_entry(&self) -> bool {
        self.entry.is_some()
    }

    /// Attach a bullet to the innermost open container.
    fn push_bullet(&mut self, text: String) {
        if let Some(sub_role) = self.sub_role.as_mut() {
            sub_role.bullets.push(text);
        } else if let Some(entry) = self.entry.as_mut() {
            entry.bullets.push(text);
        } else if let Some(section) = self.section.as_mut() {
            section.items.push(text);
        }
    }

    fn push_item(&mut self, text: String) {
        if let Some(section) = self.section.as_mut() {
            section.items.push(text);
        }
    }

    fn finish(mut self) -> Vec<ResumeSection> {
        self.flush_section();
        self.sections
    }
}

/// Parse resume-style plain text into the structured model.
///
/// The parser is total: every line lands in some container via the
/// fallback rule, malformed input degrades to flat items rather than
/// failing, and whitespace-only input yields the canonical empty
/// resume.
pub fn parse_structure(text: &str) -> ResumeData {
    if text.trim().is_empty() {
        return ResumeData::empty();
    }

    let classifier = LineClassifier::new();
    let lines: Vec<String> = text
        .lines()
        .map(|l| classifier.clean_underscores(l))
        .collect();

    let (header, body_start) = parse_header(&lines, &classifier);

    let mut acc = Accumulator::default();
    let mut i = body_start;
    while i < lines.len() {
        let trimmed = lines[i].trim();
        if trimmed.is_empty() || classifier.is_page_footer(trimmed) {
            i += 1;
            continue;
        }

        if classifier.is_section_header(trimmed) {
            let heading = classifier.clean_heading(trimmed);
            debug!("opening section {:?}", heading);
            acc.open_section(heading);
            i += 1;
            continue;
        }

        acc.ensure_section();

        if classifier.is_bullet_line(trimmed) {
            let mut bullet = classifier.strip_bullet(trimmed);

            // Absorb soft-wrapped continuation lines until something
            // classifiable starts
            let mut next = i + 1;
            while next < lines.len() {
                let cont = lines[next].trim();
                if cont.is_empty()
                    || classifier.is_bullet_line(cont)
                    || classifier.is_section_header(cont)
                    || classifier.is_entry_title(cont)
                    || classifier.is_sub_role(cont)
                {
                    break;
                }
                bullet.push(' ');
                bullet.push_str(cont);
                next += 1;
            }
            i = next;

            acc.push_bullet(bullet);
            continue;
        }

        if classifier.is_entry_title(trimmed) {
            let (title, date_range) = classifier.dates.split_title_and_date(trimmed);
            acc.open_entry(title, date_range);
            i += 1;
            continue;
        }

        if acc.has_open_entry() && classifier.is_sub_role(trimmed) {
            acc.open_sub_role(trimmed.to_string());
            i += 1;
            continue;
        }

        acc.push_item(trimmed.to_string());
        i += 1;
    }

    ResumeData {
        header,
        sections: acc.finish(),
    }
}
