//! Positioned-run input types and token normalization.
//!
//! The wire format for run dumps matches pdf.js `getTextContent()`
//! items: the glyph string is `str`, the position is a six-element
//! affine transform, and the advance width is `width`. Non-text items
//! (marked-content markers with no glyph string) decode to an empty
//! run and are discarded during normalization.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use super::options::ExtractOptions;

/// The canonical bullet symbol used throughout the pipeline.
pub const BULLET: char = '\u{2022}';

/// Bullet glyph variants canonicalized to [`BULLET`].
const BULLET_VARIANTS: [char; 8] = [
    '\u{2022}', // •
    '\u{25CF}', // ●
    '\u{25E6}', // ◦
    '\u{25CB}', // ○
    '\u{25AA}', // ▪
    '\u{2023}', // ‣
    '\u{2219}', // ∙
    '\u{00B7}', // ·
];

/// Ratio of font size used to estimate advance width when absent.
const WIDTH_FALLBACK_RATIO: f32 = 0.5;

/// One positioned text run as emitted by a page-content extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextRun {
    /// Glyph string
    #[serde(rename = "str", alias = "text", default)]
    pub text: String,

    /// Affine transform `[a, b, c, d, e, f]`; `e`/`f` are the x/y
    /// translation and `d` the vertical scale
    #[serde(default)]
    pub transform: Option<[f32; 6]>,

    /// Advance width in text-space units
    #[serde(default)]
    pub width: Option<f32>,
}

impl TextRun {
    /// Create a run with an explicit position, width, and font size.
    pub fn new(text: impl Into<String>, x: f32, y: f32, width: f32, font_size: f32) -> Self {
        Self {
            text: text.into(),
            transform: Some([font_size, 0.0, 0.0, font_size, x, y]),
            width: Some(width),
        }
    }
}

/// One page of positioned runs, in extraction order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunPage {
    /// Runs as emitted by the extractor (spatially unordered)
    pub items: Vec<TextRun>,
}

impl RunPage {
    /// Create a page from a list of runs.
    pub fn new(items: Vec<TextRun>) -> Self {
        Self { items }
    }
}

impl From<Vec<TextRun>> for RunPage {
    fn from(items: Vec<TextRun>) -> Self {
        Self::new(items)
    }
}

/// A cleaned token with resolved position and size.
///
/// Lives only for the duration of one page's line clustering.
#[derive(Debug, Clone)]
pub struct PositionedToken {
    /// Cleaned text (never empty)
    pub text: String,
    /// X position of the left edge
    pub x: f32,
    /// Y position of the baseline
    pub y: f32,
    /// Advance width
    pub width: f32,
    /// Font size derived from the transform's vertical scale
    pub font_size: f32,
}

impl PositionedToken {
    /// Whether this token is exactly the canonical bullet symbol.
    pub fn is_bullet(&self) -> bool {
        self.text.trim() == "\u{2022}"
    }
}

/// Normalize one raw run into a positioned token.
///
/// Returns `None` when the run has no visible text after whitespace
/// collapsing. Whitespace runs collapse to one space, bullet glyph
/// variants become the canonical symbol, and the text is NFC-normalized
/// so presentation-form code points do not defeat the character-class
/// checks downstream. Non-finite coordinates, scales, and widths fall
/// back to defaults rather than propagating.
pub fn normalize_run(run: &TextRun, options: &ExtractOptions) -> Option<PositionedToken> {
    let text = clean_text(&run.text);
    if text.trim().is_empty() {
        return None;
    }

    let (x, y) = match run.transform {
        Some(t) => (finite_or(t[4], 0.0), finite_or(t[5], 0.0)),
        None => (0.0, 0.0),
    };

    let font_size = run
        .transform
        .map(|t| t[3].abs())
        .filter(|s| s.is_finite())
        .unwrap_or(options.default_font_size);

    let char_count = text.chars().count() as f32;
    let width = run
        .width
        .filter(|w| w.is_finite())
        .unwrap_or(char_count * font_size * WIDTH_FALLBACK_RATIO);

    Some(PositionedToken {
        text,
        x,
        y,
        width,
        font_size,
    })
}

/// NFC-normalize, collapse whitespace runs to single spaces, and
/// canonicalize bullet glyphs.
fn clean_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_space = false;
    for ch in raw.nfc() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
            }
            prev_space = true;
        } else {
            prev_space = false;
            if BULLET_VARIANTS.contains(&ch) {
                out.push(BULLET);
            } else {
                out.push(ch);
            }
        }
    }
    out
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}
