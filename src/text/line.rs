//! A single line of the document with its lazily built grapheme layout.

use crate::unicode::{GraphemeSpan, WidthConfig, grapheme_spans};
use std::cell::OnceCell;

/// One line of text, without its terminating break.
///
/// The grapheme layout is computed on first use and dropped whenever the
/// content changes, so only lines that are touched pay for re-segmentation.
#[derive(Clone, Debug, Default)]
pub struct Line {
    text: String,
    spans: OnceCell<Vec<GraphemeSpan>>,
}

impl Line {
    /// Create a line from text that holds no break characters.
    #[must_use]
    pub(crate) fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        debug_assert!(!super::breaks::has_break(&text), "line content holds a break");
        Self {
            text,
            spans: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Grapheme layout for this line, built on first access.
    pub fn spans(&self, config: &WidthConfig) -> &[GraphemeSpan] {
        self.spans.get_or_init(|| grapheme_spans(&self.text, config))
    }

    /// Whether the layout cache is currently populated.
    #[must_use]
    pub fn is_layout_cached(&self) -> bool {
        self.spans.get().is_some()
    }

    /// Total display width of the line.
    pub fn width(&self, config: &WidthConfig) -> usize {
        self.spans(config).last().map_or(0, GraphemeSpan::col_end)
    }

    /// Drop the cached layout.
    pub fn invalidate(&mut self) {
        self.spans.take();
    }

    /// Insert `text` at `offset` (clamped down to a char boundary).
    pub fn insert_str(&mut self, offset: usize, text: &str) {
        let offset = self.floor_char_boundary(offset);
        self.text.insert_str(offset, text);
        self.invalidate();
    }

    /// Append `text` to the end of the line.
    pub fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
        self.invalidate();
    }

    /// Remove bytes `start..end`, both clamped to char boundaries. Returns the removed text.
    pub fn remove_range(&mut self, start: usize, end: usize) -> String {
        let start = self.floor_char_boundary(start);
        let end = self.floor_char_boundary(end).max(start);
        let removed: String = self.text.drain(start..end).collect();
        if !removed.is_empty() {
            self.invalidate();
        }
        removed
    }

    /// Cut the line at `offset`, keeping the head and returning the tail.
    pub fn split_off(&mut self, offset: usize) -> Self {
        let offset = self.floor_char_boundary(offset);
        let tail = self.text.split_off(offset);
        self.invalidate();
        Self::new(tail)
    }

    /// Largest char boundary at or below `offset`, clamped to the line length.
    #[must_use]
    pub fn floor_char_boundary(&self, offset: usize) -> usize {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Line {}
