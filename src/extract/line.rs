//! Line clustering and intra-line text assembly.
//!
//! Tokens arrive spatially unordered. Clustering visits them in reading
//! order (y descending, then x ascending) and grows one line group at a
//! time, comparing each token's baseline against the running mean of
//! the open group. The tolerance scales with the group's mean font size
//! because large headings carry proportionally more baseline jitter
//! than body text.

use std::cmp::Ordering;

use log::debug;

use super::options::ExtractOptions;
use super::run::PositionedToken;

/// A reconstructed line of text on one page.
#[derive(Debug, Clone)]
pub struct Line {
    /// Mean baseline of the clustered tokens
    pub y: f32,
    /// Mean font size of the clustered tokens
    pub font_size: f32,
    /// Assembled line text, trimmed
    pub text: String,
}

/// Group one page's tokens into lines by baseline proximity.
pub fn cluster_lines(mut tokens: Vec<PositionedToken>, options: &ExtractOptions) -> Vec<Line> {
    if tokens.is_empty() {
        return vec![];
    }

    // Sort into reading order: y descending (page y grows upward), then x
    tokens.sort_by(|a, b| {
        let y_cmp = b.y.partial_cmp(&a.y).unwrap_or(Ordering::Equal);
        if y_cmp == Ordering::Equal {
            a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal)
        } else {
            y_cmp
        }
    });

    let mut lines: Vec<Line> = Vec::new();
    let mut group: Vec<PositionedToken> = Vec::new();
    let mut sum_y = 0.0f32;
    let mut sum_size = 0.0f32;

    for token in tokens {
        if !group.is_empty() {
            let count = group.len() as f32;
            let mean_y = sum_y / count;
            let mean_size = sum_size / count;
            let tolerance = options
                .min_line_tolerance
                .max(mean_size * options.line_tolerance_ratio);

            if (token.y - mean_y).abs() > tolerance {
                if let Some(line) = reduce_group(std::mem::take(&mut group), options) {
                    lines.push(line);
                }
                sum_y = 0.0;
                sum_size = 0.0;
            }
        }

        sum_y += token.y;
        sum_size += token.font_size;
        group.push(token);
    }

    if let Some(line) = reduce_group(group, options) {
        lines.push(line);
    }

    debug!("clustered tokens into {} lines", lines.len());
    lines
}

/// Reduce a token group to a line; drops groups that assemble to nothing.
fn reduce_group(group: Vec<PositionedToken>, options: &ExtractOptions) -> Option<Line> {
    if group.is_empty() {
        return None;
    }

    let count = group.len() as f32;
    let y = group.iter().map(|t| t.y).sum::<f32>() / count;
    let font_size = group.iter().map(|t| t.font_size).sum::<f32>() / count;
    let text = assemble_line_text(group, options);
    if text.is_empty() {
        return None;
    }

    Some(Line { y, font_size, text })
}

/// Join one line's tokens left-to-right, spacing them by horizontal gap.
///
/// A bullet on either side always gets one separating space. A gap
/// wider than three character widths reads as a column or tab-stop
/// boundary and gets two spaces. A gap wider than 1.1 character widths
/// gets one space; so does an alphanumeric pair that merely touches,
/// since imprecise advance widths routinely swallow real word gaps.
/// Only genuinely overlapping fragments (split glyphs) and tight
/// punctuation join with no separator.
pub fn assemble_line_text(mut tokens: Vec<PositionedToken>, options: &ExtractOptions) -> String {
    if tokens.is_empty() {
        return String::new();
    }

    tokens.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));

    let mut result = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i == 0 {
            result.push_str(&token.text);
            continue;
        }

        let prev = &tokens[i - 1];
        let gap = token.x - (prev.x + prev.width);
        let prev_chars = prev.text.chars().count().max(1) as f32;
        let char_width = options.min_char_width.max(prev.width / prev_chars);

        let separator = if prev.is_bullet() || token.is_bullet() {
            " "
        } else if gap > char_width * options.double_space_ratio {
            "  "
        } else if gap > char_width * options.single_space_ratio
            || (alnum_boundary(prev, token) && gap > -char_width * options.overlap_ratio)
        {
            " "
        } else {
            ""
        };

        result.push_str(separator);
        result.push_str(&token.text);
    }

    result.trim().to_string()
}

fn alnum_boundary(prev: &PositionedToken, next: &PositionedToken) -> bool {
    let prev_last = prev
        .text
        .chars()
        .last()
        .map(|c| c.is_alphanumeric())
        .unwrap_or(false);
    let next_first = next
        .text
        .chars()
        .next()
        .map(|c| c.is_alphanumeric())
        .unwrap_or(false);
    prev_last && next_first
}
