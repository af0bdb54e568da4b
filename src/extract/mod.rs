//! Reading-order text reconstruction from positioned runs.
//!
//! The stages run strictly in order per page: normalize raw runs into
//! tokens, cluster tokens into lines, assemble each line's text from
//! horizontal gaps, then segment lines into paragraphs and concatenate
//! pages. Pages are independent of one another and may be processed in
//! parallel without changing the output.

mod line;
mod options;
mod page;
mod run;

pub use line::{assemble_line_text, cluster_lines, Line};
pub use options::ExtractOptions;
pub use page::PageSegmenter;
pub use run::{normalize_run, PositionedToken, RunPage, TextRun, BULLET};

pub(crate) use page::PAGE_FOOTER_PATTERN;
