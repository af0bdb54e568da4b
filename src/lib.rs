//! # vitae
//!
//! Resume reconstruction from positioned text runs.
//!
//! This library rebuilds reading-order plain text from geometry dumps
//! of positioned text runs (pdf.js-style `{str, transform, width}`
//! records) and parses the result into a structured resume: a header
//! with name and contact items, followed by sections holding dated
//! entries, sub-roles, bullets, and free-standing items.
//!
//! ## Quick Start
//!
//! ```no_run
//! use vitae::{JsonFormat, Vitae};
//!
//! fn main() -> vitae::Result<()> {
//!     // Load a positioned-run dump
//!     let json = std::fs::read_to_string("resume-runs.json")?;
//!
//!     // Reconstruct reading order and parse the structure
//!     let resume = Vitae::new().process(&json)?;
//!
//!     println!("{}", vitae::to_text(&resume));
//!     std::fs::write("resume.json", vitae::to_json(&resume, JsonFormat::Pretty)?)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Reading-order reconstruction**: baseline clustering with gap-aware line assembly
//! - **Paragraph segmentation**: vertical-pitch analysis with page-footer removal
//! - **Structural parsing**: sections, dated entries, sub-roles, bullets, contact lines
//! - **Multiple output formats**: canonical plain text and JSON
//! - **Parallel processing**: Uses Rayon for multi-page dumps

pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod parse;
pub mod render;

// Re-export commonly used types
pub use detect::{detect_input_from_bytes, detect_input_from_path, is_run_dump_bytes, InputKind};
pub use error::{Error, Result};
pub use extract::{
    assemble_line_text, cluster_lines, normalize_run, ExtractOptions, Line, PageSegmenter,
    PositionedToken, RunPage, TextRun, BULLET,
};
pub use model::{ResumeBulletEntry, ResumeData, ResumeHeader, ResumeSection, SubRole};
pub use parse::parse_structure;
pub use render::{to_json, to_text, JsonFormat};

use std::path::Path;

/// Parse a positioned-run dump from its JSON form.
///
/// The dump is an array of pages, each holding an `items` array of
/// runs. Unknown fields are ignored, so raw pdf.js `getTextContent()`
/// output can be fed in directly.
///
/// # Example
///
/// ```
/// let json = r#"[{"items":[{"str":"Hi","transform":[12,0,0,12,72,700],"width":11}]}]"#;
/// let pages = vitae::parse_run_dump(json).unwrap();
/// assert_eq!(pages.len(), 1);
/// ```
pub fn parse_run_dump(json: &str) -> Result<Vec<RunPage>> {
    serde_json::from_str(json).map_err(|e| Error::Extraction(format!("invalid run dump: {e}")))
}

/// Reconstruct reading-order text from run pages with default options.
///
/// # Example
///
/// ```no_run
/// let json = std::fs::read_to_string("resume-runs.json").unwrap();
/// let pages = vitae::parse_run_dump(&json).unwrap();
/// let text = vitae::extract_text(&pages);
/// println!("{}", text);
/// ```
pub fn extract_text(pages: &[RunPage]) -> String {
    PageSegmenter::default().extract_document(pages)
}

/// Reconstruct reading-order text with custom options.
///
/// # Example
///
/// ```no_run
/// use vitae::ExtractOptions;
///
/// let json = std::fs::read_to_string("resume-runs.json").unwrap();
/// let pages = vitae::parse_run_dump(&json).unwrap();
/// let options = ExtractOptions::new().with_paragraph_break_ratio(1.8);
/// let text = vitae::extract_text_with_options(&pages, options);
/// ```
pub fn extract_text_with_options(pages: &[RunPage], options: ExtractOptions) -> String {
    PageSegmenter::new(options).extract_document(pages)
}

/// Run the full pipeline on a run-dump JSON string.
///
/// Equivalent to [`parse_run_dump`] followed by [`extract_text`] and
/// [`parse_structure`].
pub fn process(json: &str) -> Result<ResumeData> {
    let pages = parse_run_dump(json)?;
    let text = extract_text(&pages);
    Ok(parse_structure(&text))
}

/// Process raw bytes of any supported input kind.
///
/// The kind is sniffed with [`detect_input_from_bytes`]: run dumps go
/// through the full pipeline, resume-structure JSON is deserialized
/// as-is, and everything else is parsed as plain text.
pub fn process_bytes(data: &[u8]) -> Result<ResumeData> {
    match detect_input_from_bytes(data) {
        InputKind::RunDump => {
            let pages: Vec<RunPage> = serde_json::from_slice(data)
                .map_err(|e| Error::Extraction(format!("invalid run dump: {e}")))?;
            Ok(parse_structure(&extract_text(&pages)))
        }
        InputKind::Structure => Ok(serde_json::from_slice(data)?),
        InputKind::PlainText => {
            let text = String::from_utf8_lossy(data);
            Ok(parse_structure(text.trim_start_matches('\u{feff}')))
        }
    }
}

/// Process a file of any supported input kind.
///
/// # Example
///
/// ```no_run
/// let resume = vitae::process_file("resume.txt").unwrap();
/// println!("{}", resume.header.name);
/// ```
pub fn process_file<P: AsRef<Path>>(path: P) -> Result<ResumeData> {
    let data = std::fs::read(path)?;
    process_bytes(&data)
}

/// Builder for configuring the reconstruction pipeline.
///
/// # Example
///
/// ```no_run
/// use vitae::Vitae;
///
/// let json = std::fs::read_to_string("resume-runs.json").unwrap();
/// let resume = Vitae::new()
///     .with_paragraph_break_ratio(1.8)
///     .sequential()
///     .process(&json)
///     .unwrap();
/// println!("{} sections", resume.section_count());
/// ```
pub struct Vitae {
    options: ExtractOptions,
}

impl Vitae {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: ExtractOptions::default(),
        }
    }

    /// Replace the extraction options wholesale.
    pub fn with_extract_options(mut self, options: ExtractOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the paragraph break threshold as a multiple of line pitch.
    pub fn with_paragraph_break_ratio(mut self, ratio: f32) -> Self {
        self.options = self.options.with_paragraph_break_ratio(ratio);
        self
    }

    /// Disable parallel page processing.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Reconstruct reading-order text from run pages.
    pub fn extract(&self, pages: &[RunPage]) -> String {
        PageSegmenter::new(self.options.clone()).extract_document(pages)
    }

    /// Run the full pipeline on a run-dump JSON string.
    pub fn process(&self, json: &str) -> Result<ResumeData> {
        let pages = parse_run_dump(json)?;
        Ok(self.process_pages(&pages))
    }

    /// Extract and parse already-deserialized run pages.
    pub fn process_pages(&self, pages: &[RunPage]) -> ResumeData {
        parse_structure(&self.extract(pages))
    }
}

impl Default for Vitae {
    fn default() -> Self {
        Self::new()
    }
}
