//! Month/season date detection and title/date-range splitting.

use regex::Regex;

/// Month names, their abbreviations, and season names that can open a
/// date expression. "May" needs no separate abbreviation.
const DATE_WORDS: &str = "January|February|March|April|May|June|July|August|September|October|\
                          November|December|Jan|Feb|Mar|Apr|Jun|Jul|Aug|Sep|Oct|Nov|Dec|\
                          Fall|Spring|Summer|Winter";

/// Full month and season names accepted at the start of a trailing
/// date range.
const RANGE_START_WORDS: &str = "January|February|March|April|May|June|July|August|September|\
                                 October|November|December|Fall|Spring|Summer|Winter";

/// Words accepted after the dash of a trailing date range.
const RANGE_END_WORDS: &str = "January|February|March|April|May|June|July|August|September|\
                               October|November|December|Present|Current";

/// Compiled date patterns shared by the classification predicates.
pub(crate) struct DatePatterns {
    month_year: Regex,
    trailing_range: Regex,
    tab_runs: Regex,
    space_runs: Regex,
}

impl DatePatterns {
    pub(crate) fn new() -> Self {
        Self {
            month_year: Regex::new(&format!(r"(?i)(?:{DATE_WORDS})\s+\d{{4}}")).unwrap(),
            trailing_range: Regex::new(&format!(
                r"(?i)(\s{{2,}})((?:{RANGE_START_WORDS})\s+\d{{4}}\s*[–\-—]\s*(?:{RANGE_END_WORDS})?\s*\d{{0,4}})"
            ))
            .unwrap(),
            tab_runs: Regex::new(r"\t{2,}").unwrap(),
            space_runs: Regex::new(r"\s{2,}").unwrap(),
        }
    }

    /// Whether the line contains a month-or-season followed by a year.
    pub(crate) fn has_date(&self, line: &str) -> bool {
        self.month_year.is_match(line)
    }

    /// Split an entry title line into title and date range.
    ///
    /// Tried in order: segments separated by runs of two or more tabs,
    /// then by runs of two or more whitespace characters (in both cases
    /// the last segment must itself contain a date), then a search for
    /// a wide gap followed by a month/season year range. When nothing
    /// matches, the whole trimmed line is the title and the range is
    /// empty.
    pub(crate) fn split_title_and_date(&self, line: &str) -> (String, String) {
        if let Some(split) = self.split_on(&self.tab_runs, line) {
            return split;
        }
        if let Some(split) = self.split_on(&self.space_runs, line) {
            return split;
        }

        if let Some(caps) = self.trailing_range.captures(line) {
            let whole = caps.get(0).unwrap();
            let range = caps.get(2).unwrap();
            return (
                line[..whole.start()].trim().to_string(),
                range.as_str().trim().to_string(),
            );
        }

        (line.trim().to_string(), String::new())
    }

    fn split_on(&self, separator: &Regex, line: &str) -> Option<(String, String)> {
        let parts: Vec<&str> = separator
            .split(line)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        if parts.len() < 2 {
            return None;
        }

        let last = parts[parts.len() - 1];
        if !self.month_year.is_match(last) {
            return None;
        }

        Some((parts[..parts.len() - 1].join(" "), last.to_string()))
    }
}
