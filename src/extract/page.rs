//! Page-level paragraph segmentation and document assembly.
//!
//! Lines are ordered top to bottom, running footers dropped, and a
//! blank line inserted wherever the vertical gap between neighbors is
//! well above the page's typical line pitch. Pages concatenate in
//! order with a blank line between them; an empty page contributes an
//! empty string and the resulting blank run collapses back to a single
//! separator.

use std::cmp::Ordering;

use log::debug;
use rayon::prelude::*;
use regex::Regex;

use super::line::{cluster_lines, Line};
use super::options::ExtractOptions;
use super::run::{normalize_run, RunPage};

/// Pattern matched by running page footers ("-- 2 of 3 --").
pub(crate) const PAGE_FOOTER_PATTERN: &str = r"(?i)^--\s*\d+\s+of\s+\d+\s*--$";

/// Segments pages of positioned runs into paragraph-broken plain text.
///
/// Holds the compiled patterns so repeated extractions do not pay the
/// regex build cost per page.
pub struct PageSegmenter {
    options: ExtractOptions,
    footer: Regex,
    blank_runs: Regex,
}

impl PageSegmenter {
    /// Create a segmenter with the given options.
    pub fn new(options: ExtractOptions) -> Self {
        Self {
            options,
            footer: Regex::new(PAGE_FOOTER_PATTERN).unwrap(),
            // Three or more consecutive blank lines
            blank_runs: Regex::new(r"\n{4,}").unwrap(),
        }
    }

    /// Reconstruct the whole document's plain text from its pages.
    ///
    /// Pages are independent and run through rayon when `parallel` is
    /// set; output is identical either way and page order is preserved.
    pub fn extract_document(&self, pages: &[RunPage]) -> String {
        let page_texts: Vec<String> = if self.options.parallel {
            pages.par_iter().map(|p| self.extract_page(p)).collect()
        } else {
            pages.iter().map(|p| self.extract_page(p)).collect()
        };

        let joined = page_texts.join("\n\n");
        self.blank_runs
            .replace_all(&joined, "\n\n")
            .trim()
            .to_string()
    }

    /// Reconstruct one page's text with paragraph breaks.
    ///
    /// A page yielding no usable tokens produces an empty string, not
    /// an error.
    pub fn extract_page(&self, page: &RunPage) -> String {
        let tokens: Vec<_> = page
            .items
            .iter()
            .filter_map(|r| normalize_run(r, &self.options))
            .collect();
        if tokens.is_empty() {
            return String::new();
        }

        let mut lines = cluster_lines(tokens, &self.options);

        // Top to bottom, then drop running footers
        lines.sort_by(|a, b| b.y.partial_cmp(&a.y).unwrap_or(Ordering::Equal));
        lines.retain(|l| !self.footer.is_match(&l.text));
        if lines.is_empty() {
            return String::new();
        }

        let pitch = self.line_pitch(&lines);
        let threshold = pitch * self.options.paragraph_break_ratio;
        debug!(
            "segmenting {} lines, pitch {:.2}, break threshold {:.2}",
            lines.len(),
            pitch,
            threshold
        );

        let mut out = String::new();
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
                let gap = lines[i - 1].y - line.y;
                if gap >= threshold {
                    out.push('\n');
                }
            }
            out.push_str(&line.text);
        }
        out
    }

    /// Typical distance between consecutive baselines on the page:
    /// the lower median of the positive gaps.
    fn line_pitch(&self, lines: &[Line]) -> f32 {
        let mut gaps: Vec<f32> = lines
            .windows(2)
            .map(|w| w[0].y - w[1].y)
            .filter(|g| *g > 0.0)
            .collect();
        if gaps.is_empty() {
            return self.options.default_line_pitch;
        }
        gaps.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        gaps[(gaps.len() - 1) / 2]
    }
}

impl Default for PageSegmenter {
    fn default() -> Self {
        Self::new(ExtractOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::run::TextRun;

    fn run(text: &str, x: f32, y: f32, width: f32) -> TextRun {
        TextRun::new(text, x, y, width, 10.0)
    }

    fn page(runs: Vec<TextRun>) -> RunPage {
        RunPage::new(runs)
    }

    #[test]
    fn test_break_only_on_large_gap() {
        // Gaps 12 and 48; pitch is the lower median 12, threshold 19.8
        let p = page(vec![
            run("alpha", 0.0, 100.0, 25.0),
            run("beta", 0.0, 88.0, 20.0),
            run("gamma", 0.0, 40.0, 25.0),
        ]);
        let seg = PageSegmenter::default();
        assert_eq!(seg.extract_page(&p), "alpha\nbeta\n\ngamma");
    }

    #[test]
    fn test_footer_lines_dropped() {
        let p = page(vec![
            run("content", 0.0, 100.0, 35.0),
            run("-- 2 of 3 --", 0.0, 20.0, 50.0),
        ]);
        let seg = PageSegmenter::default();
        assert_eq!(seg.extract_page(&p), "content");
    }

    #[test]
    fn test_footer_match_is_case_insensitive() {
        let p = page(vec![
            run("content", 0.0, 100.0, 35.0),
            run("-- 2 OF 3 --", 0.0, 20.0, 50.0),
        ]);
        let seg = PageSegmenter::default();
        assert_eq!(seg.extract_page(&p), "content");
    }

    #[test]
    fn test_empty_page_yields_empty_string() {
        let seg = PageSegmenter::default();
        assert_eq!(seg.extract_page(&page(vec![])), "");
        assert_eq!(seg.extract_page(&page(vec![run("   ", 0.0, 0.0, 5.0)])), "");
    }

    #[test]
    fn test_single_line_uses_pitch_fallback() {
        let p = page(vec![run("only", 0.0, 100.0, 20.0)]);
        let seg = PageSegmenter::default();
        assert_eq!(seg.extract_page(&p), "only");
    }

    #[test]
    fn test_lines_ordered_top_to_bottom() {
        let p = page(vec![
            run("bottom", 0.0, 40.0, 30.0),
            run("top", 0.0, 100.0, 15.0),
            run("middle", 0.0, 88.0, 30.0),
        ]);
        let seg = PageSegmenter::default();
        let text = seg.extract_page(&p);
        let top = text.find("top").unwrap();
        let middle = text.find("middle").unwrap();
        let bottom = text.find("bottom").unwrap();
        assert!(top < middle && middle < bottom);
    }

    #[test]
    fn test_pages_join_with_blank_line() {
        let pages = vec![
            page(vec![run("first page", 0.0, 100.0, 50.0)]),
            page(vec![run("second page", 0.0, 100.0, 55.0)]),
        ];
        let seg = PageSegmenter::default();
        assert_eq!(seg.extract_document(&pages), "first page\n\nsecond page");
    }

    #[test]
    fn test_empty_page_between_pages_collapses() {
        let pages = vec![
            page(vec![run("first", 0.0, 100.0, 25.0)]),
            page(vec![]),
            page(vec![run("last", 0.0, 100.0, 20.0)]),
        ];
        let seg = PageSegmenter::default();
        assert_eq!(seg.extract_document(&pages), "first\n\nlast");
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let pages: Vec<RunPage> = (0..8)
            .map(|i| {
                page(vec![
                    run(&format!("page {} heading", i), 0.0, 100.0, 80.0),
                    run("body line one", 0.0, 88.0, 60.0),
                    run("body line two", 0.0, 76.0, 60.0),
                ])
            })
            .collect();

        let parallel = PageSegmenter::new(ExtractOptions::default());
        let sequential = PageSegmenter::new(ExtractOptions::default().sequential());
        assert_eq!(
            parallel.extract_document(&pages),
            sequential.extract_document(&pages)
        );
    }
}
