//! Line classification predicates for the structural scan.
//!
//! Each predicate is pure and inspects one trimmed line; the scan in
//! [`super::scan`] applies them in a fixed precedence order (footer,
//! section header, bullet, entry title, sub-role, fallback). Keeping
//! them independent keeps the precedence auditable.

use regex::Regex;

use super::date::DatePatterns;
use crate::extract::PAGE_FOOTER_PATTERN;

/// Shortest cleaned line accepted as a section header.
const MIN_HEADER_LEN: usize = 3;
/// Longest cleaned line accepted as a section header.
const MAX_HEADER_LEN: usize = 50;
/// Longest line the "@" shorthand may classify as an entry title.
const MAX_ENTRY_TITLE_LEN: usize = 100;
/// Longest line the slash heuristic may classify as a sub-role.
const MAX_SUB_ROLE_LEN: usize = 80;
/// Fewest capitalized words the slash heuristic requires.
const MIN_SUB_ROLE_CAPS: usize = 2;
/// Longest text prefix for which a following underscore run reads as a
/// heading underline and is removed.
const MAX_UNDERLINE_PREFIX: usize = 40;

/// Compiled patterns for one parse pass.
pub(crate) struct LineClassifier {
    bullet: Regex,
    header: Regex,
    footer: Regex,
    underscores: Regex,
    area_code: Regex,
    phone: Regex,
    contact_separators: Regex,
    pub(crate) dates: DatePatterns,
}

impl LineClassifier {
    pub(crate) fn new() -> Self {
        Self {
            bullet: Regex::new(r"^[\u{2022}\u{25CF}\u{25E6}\-*]\s+").unwrap(),
            header: Regex::new(r"^[A-Z][A-Z&/\s]+$").unwrap(),
            footer: Regex::new(PAGE_FOOTER_PATTERN).unwrap(),
            underscores: Regex::new(r"_+").unwrap(),
            area_code: Regex::new(r"\(\d{3}\)").unwrap(),
            phone: Regex::new(r"\d{3}[.\-]\d{3}[.\-]\d{4}").unwrap(),
            contact_separators: Regex::new(r"[\u{2022}\u{00B7}\u{2219}|,]\s*").unwrap(),
            dates: DatePatterns::new(),
        }
    }

    /// A running page footer ("-- 2 of 3 --") that slipped through
    /// extraction or was typed into pasted text.
    pub(crate) fn is_page_footer(&self, line: &str) -> bool {
        self.footer.is_match(line.trim())
    }

    /// An all-caps section heading of plausible length, ignoring any
    /// underline underscores.
    pub(crate) fn is_section_header(&self, line: &str) -> bool {
        let cleaned = self.underscores.replace_all(line, "");
        let cleaned = cleaned.trim();
        let len = cleaned.chars().count();
        if len < MIN_HEADER_LEN || len > MAX_HEADER_LEN {
            return false;
        }
        self.header.is_match(cleaned)
    }

    /// A line opening with a bullet marker followed by whitespace.
    pub(crate) fn is_bullet_line(&self, line: &str) -> bool {
        self.bullet.is_match(line.trim())
    }

    /// Remove the leading bullet marker and its trailing whitespace.
    pub(crate) fn strip_bullet(&self, line: &str) -> String {
        self.bullet.replace(line.trim(), "").to_string()
    }

    /// A non-bullet line carrying a date, or a short line with an "@"
    /// (the "Role @ Company" shorthand).
    pub(crate) fn is_entry_title(&self, line: &str) -> bool {
        let trimmed = line.trim();
        if trimmed.is_empty() || self.is_bullet_line(trimmed) {
            return false;
        }
        if self.dates.has_date(trimmed) {
            return true;
        }
        trimmed.contains('@') && trimmed.chars().count() < MAX_ENTRY_TITLE_LEN
    }

    /// A nested-role title: a dateless line with a "|", or a short
    /// dateless line with a "/" and at least two capitalized words.
    ///
    /// The slash arm can false-positive on ordinary titles that happen
    /// to contain a slash ("Sales/Marketing Manager"); the scan only
    /// consults this predicate while an entry is open, which bounds the
    /// damage to nesting under that entry.
    pub(crate) fn is_sub_role(&self, line: &str) -> bool {
        let trimmed = line.trim();
        if self.is_bullet_line(trimmed) || self.is_section_header(trimmed) {
            return false;
        }
        if trimmed.contains('|') && !self.dates.has_date(trimmed) {
            return true;
        }
        if trimmed.contains('/')
            && !self.dates.has_date(trimmed)
            && trimmed.chars().count() < MAX_SUB_ROLE_LEN
        {
            let caps = trimmed
                .split_whitespace()
                .filter(|w| w.chars().next().is_some_and(|c| c.is_ascii_uppercase()))
                .count();
            if caps >= MIN_SUB_ROLE_CAPS {
                return true;
            }
        }
        false
    }

    /// A line carrying contact signals: an email sigil, a profile host
    /// name, a parenthesized area code, or a dotted/dashed phone number.
    pub(crate) fn has_contact_info(&self, line: &str) -> bool {
        line.contains('@')
            || line.contains("linkedin")
            || line.contains("github")
            || self.area_code.is_match(line)
            || self.phone.is_match(line)
    }

    /// Split a contact line on bullet, pipe, and comma separators.
    pub(crate) fn split_contacts(&self, line: &str) -> Vec<String> {
        self.contact_separators
            .split(line)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Strip all underscores from a heading line.
    pub(crate) fn clean_heading(&self, line: &str) -> String {
        self.underscores.replace_all(line, "").trim().to_string()
    }

    /// Remove heading-underline underscore runs from a raw line.
    ///
    /// An interior run is deleted when the text before it is short
    /// (under [`MAX_UNDERLINE_PREFIX`] characters), which is the
    /// "NAME_____" underline style; runs after long text are kept, as
    /// they are usually fill-in blanks. Leading and trailing runs are
    /// always stripped.
    pub(crate) fn clean_underscores(&self, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len());
        let mut last = 0;
        for m in self.underscores.find_iter(raw) {
            out.push_str(&raw[last..m.start()]);
            let prefix_len = raw[..m.start()].trim().chars().count();
            if prefix_len == 0 || prefix_len >= MAX_UNDERLINE_PREFIX {
                out.push_str(m.as_str());
            }
            last = m.end();
        }
        out.push_str(&raw[last..]);
        out.trim_end_matches('_').trim_start_matches('_').to_string()
    }
}
