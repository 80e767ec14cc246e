//! Page flow: a vertical cursor that places text lines top-down and starts a new
//! page whenever the next baseline would cross the bottom margin.
//!
//! Coordinates are millimetres from the top-left corner of the page; `y_mm` is the
//! text baseline. The PDF writer converts to points and flips the y axis.

use serde::{Deserialize, Serialize};

use crate::layout::font_metrics::{get_metrics, Face, FontMetricTable, PageConfig};
use crate::layout::wrap::wrap_text;

// ────────────────────────────────────────────────────────────────────────────
// Document model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Font, size and colour of a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub face: Face,
    pub size_pt: f32,
    pub color: Rgb,
}

impl TextStyle {
    pub fn metrics(&self) -> &'static FontMetricTable {
        get_metrics(&self.face)
    }
}

/// One positioned line of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub x_mm: f32,
    pub y_mm: f32,
    pub text: String,
    pub style: TextStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub blocks: Vec<TextBlock>,
}

/// The laid-out document: fixed page geometry plus the blocks of every page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub config: PageConfig,
    pub pages: Vec<Page>,
}

impl Document {
    /// All block texts in reading order, across pages.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.pages
            .iter()
            .flat_map(|page| page.blocks.iter().map(|b| b.text.as_str()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Flow
// ────────────────────────────────────────────────────────────────────────────

pub struct PageFlow {
    config: PageConfig,
    pages: Vec<Page>,
    cursor_mm: f32,
}

impl PageFlow {
    pub fn new(config: PageConfig) -> Self {
        let cursor_mm = config.margin_mm;
        Self {
            config,
            pages: vec![Page::default()],
            cursor_mm,
        }
    }

    /// Moves the cursor down without placing anything.
    pub fn advance(&mut self, mm: f32) {
        self.cursor_mm += mm;
    }

    fn current_page_is_empty(&self) -> bool {
        self.pages.last().map_or(true, |p| p.blocks.is_empty())
    }

    fn break_page(&mut self) {
        self.pages.push(Page::default());
        self.cursor_mm = self.config.margin_mm;
    }

    /// Starts a new page unless a baseline `span_mm` below the cursor still fits.
    ///
    /// Used to keep a heading on the same page as the line that follows it. A fresh
    /// page is never broken again, so oversized groups cannot loop.
    pub fn keep_together(&mut self, span_mm: f32) {
        if self.cursor_mm + span_mm > self.config.bottom_limit_mm() && !self.current_page_is_empty()
        {
            self.break_page();
        }
    }

    /// Places one unwrapped line at the cursor, `indent_mm` right of the margin,
    /// then advances by `advance_mm`.
    pub fn line(&mut self, indent_mm: f32, text: &str, style: TextStyle, advance_mm: f32) {
        self.keep_together(0.0);
        let block = TextBlock {
            x_mm: self.config.margin_mm + indent_mm,
            y_mm: self.cursor_mm,
            text: text.to_string(),
            style,
        };
        if let Some(page) = self.pages.last_mut() {
            page.blocks.push(block);
        }
        self.cursor_mm += advance_mm;
    }

    /// Word-wraps `text` to the content width minus `indent_mm` and places every line.
    /// Returns the number of lines placed.
    pub fn paragraph(
        &mut self,
        indent_mm: f32,
        text: &str,
        style: TextStyle,
        advance_mm: f32,
    ) -> usize {
        let width = self.config.content_width_mm() - indent_mm;
        let lines = wrap_text(text, style.metrics(), style.size_pt, width);
        for line in &lines {
            self.line(indent_mm, line, style, advance_mm);
        }
        lines.len()
    }

    /// Like [`paragraph`](Self::paragraph), but the first line starts with `marker` and
    /// continuation lines hang under the text rather than under the marker.
    pub fn hanging(
        &mut self,
        indent_mm: f32,
        marker: &str,
        text: &str,
        style: TextStyle,
        advance_mm: f32,
    ) -> usize {
        let metrics = style.metrics();
        let marker_w = metrics.width_mm(marker, style.size_pt) + metrics.space_mm(style.size_pt);
        let width = self.config.content_width_mm() - indent_mm - marker_w;
        let lines = wrap_text(text, metrics, style.size_pt, width);
        for (i, line) in lines.iter().enumerate() {
            if i == 0 {
                self.line(indent_mm, &format!("{marker} {line}"), style, advance_mm);
            } else {
                self.line(indent_mm + marker_w, line, style, advance_mm);
            }
        }
        lines.len()
    }

    pub fn finish(self) -> Document {
        Document {
            config: self.config,
            pages: self.pages,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
