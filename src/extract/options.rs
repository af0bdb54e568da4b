//! Extraction options and tuning constants.

/// Minimum y-distance (in PDF units) two tokens may differ by and still
/// share a line, regardless of font size.
pub const MIN_LINE_TOLERANCE: f32 = 2.0;

/// Fraction of the running mean font size used as the line tolerance.
pub const LINE_TOLERANCE_RATIO: f32 = 0.35;

/// Floor for the estimated character width during spacing decisions.
pub const MIN_CHAR_WIDTH: f32 = 2.0;

/// Gap-to-char-width ratio above which two spaces are emitted (column gap).
pub const DOUBLE_SPACE_RATIO: f32 = 3.0;

/// Gap-to-char-width ratio above which one space is emitted (word gap).
pub const SINGLE_SPACE_RATIO: f32 = 1.1;

/// Tolerated overlap (as a fraction of char width) between adjacent
/// alphanumeric tokens that still get a separating space.
pub const OVERLAP_RATIO: f32 = 0.2;

/// Ratio of a line gap to the page's line pitch at or above which a
/// paragraph break is inserted.
pub const PARAGRAPH_BREAK_RATIO: f32 = 1.65;

/// Font size assumed when a token carries no usable transform.
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Line pitch assumed when a page has fewer than two distinct baselines.
pub const DEFAULT_LINE_PITCH: f32 = 12.0;

/// Options for reconstructing plain text from positioned runs.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Minimum y-tolerance for line clustering
    pub min_line_tolerance: f32,

    /// Font-size fraction used as the adaptive y-tolerance
    pub line_tolerance_ratio: f32,

    /// Floor for estimated character width
    pub min_char_width: f32,

    /// Gap ratio that produces a two-space column separator
    pub double_space_ratio: f32,

    /// Gap ratio that produces a single word space
    pub single_space_ratio: f32,

    /// Tolerated overlap ratio between adjacent alphanumeric tokens
    pub overlap_ratio: f32,

    /// Gap-to-pitch ratio that starts a new paragraph
    pub paragraph_break_ratio: f32,

    /// Fallback font size for tokens without a transform
    pub default_font_size: f32,

    /// Fallback line pitch for short pages
    pub default_line_pitch: f32,

    /// Whether to process pages in parallel
    pub parallel: bool,
}

impl ExtractOptions {
    /// Create new extraction options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the paragraph break ratio.
    pub fn with_paragraph_break_ratio(mut self, ratio: f32) -> Self {
        self.paragraph_break_ratio = ratio;
        self
    }

    /// Set the adaptive line tolerance ratio.
    pub fn with_line_tolerance_ratio(mut self, ratio: f32) -> Self {
        self.line_tolerance_ratio = ratio;
        self
    }

    /// Set the fallback font size.
    pub fn with_default_font_size(mut self, size: f32) -> Self {
        self.default_font_size = size;
        self
    }

    /// Enable or disable parallel page processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel page processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            min_line_tolerance: MIN_LINE_TOLERANCE,
            line_tolerance_ratio: LINE_TOLERANCE_RATIO,
            min_char_width: MIN_CHAR_WIDTH,
            double_space_ratio: DOUBLE_SPACE_RATIO,
            single_space_ratio: SINGLE_SPACE_RATIO,
            overlap_ratio: OVERLAP_RATIO,
            paragraph_break_ratio: PARAGRAPH_BREAK_RATIO,
            default_font_size: DEFAULT_FONT_SIZE,
            default_line_pitch: DEFAULT_LINE_PITCH,
            parallel: true,
        }
    }
}
