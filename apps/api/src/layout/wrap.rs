//! Greedy word wrap against static font metrics.
//!
//! Lines break only at whitespace. A word wider than the line on its own is placed on
//! a line by itself and allowed to overhang; it is never split.

use crate::layout::font_metrics::FontMetricTable;

/// Splits `text` into the fewest lines whose measured width fits `max_width_mm`.
///
/// Runs of whitespace collapse to a single space. Empty or whitespace-only text
/// yields no lines.
pub fn wrap_text(
    text: &str,
    metrics: &FontMetricTable,
    size_pt: f32,
    max_width_mm: f32,
) -> Vec<String> {
    let space_w = metrics.space_mm(size_pt);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for word in text.split_whitespace() {
        let word_w = metrics.width_mm(word, size_pt);

        if current.is_empty() {
            current.push_str(word);
            current_width = word_w;
        } else if current_width + space_w + word_w > max_width_mm {
            // Current line is full: flush it and start the next one with this word.
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_w;
        } else {
            current.push(' ');
            current.push_str(word);
            current_width += space_w + word_w;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
