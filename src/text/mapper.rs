//! Translation between byte offsets, grapheme boundaries and visual columns.
//!
//! All lookups run over a line's cached [`GraphemeSpan`] layout, whose byte
//! offsets and columns are both non-decreasing, so every query is a binary
//! search.
//!
//! [`GraphemeSpan`]: crate::unicode::GraphemeSpan

use crate::text::store::LineStore;

impl LineStore {
    /// Visual column of `offset`: the summed width of every grapheme that
    /// starts before it.
    pub fn to_visual_column(&self, line: usize, offset: usize) -> usize {
        let spans = self.spans(line);
        let idx = spans.partition_point(|s| s.byte_offset < offset);
        if idx == 0 { 0 } else { spans[idx - 1].col_end() }
    }

    /// Byte offset for a visual column.
    ///
    /// Returns the start of the first grapheme that would cross past `column`,
    /// so a column inside a wide character snaps down to that character's
    /// start. Columns past the end of the line give end-of-line.
    pub fn to_byte_offset(&self, line: usize, column: usize) -> usize {
        let spans = self.spans(line);
        let idx = spans.partition_point(|s| s.col_end() <= column);
        spans
            .get(idx)
            .map_or_else(|| self.line_len(line), |s| s.byte_offset)
    }

    /// Boundary after the grapheme at `offset`; `None` at end-of-line.
    pub fn next_grapheme_boundary(&self, line: usize, offset: usize) -> Option<usize> {
        if offset >= self.line_len(line) {
            return None;
        }
        let spans = self.spans(line);
        let idx = spans.partition_point(|s| s.byte_end() <= offset);
        spans.get(idx).map(|s| s.byte_end())
    }

    /// Boundary before `offset`; `None` at start-of-line.
    pub fn prev_grapheme_boundary(&self, line: usize, offset: usize) -> Option<usize> {
        if offset == 0 {
            return None;
        }
        let spans = self.spans(line);
        let idx = spans.partition_point(|s| s.byte_offset < offset);
        idx.checked_sub(1).map(|i| spans[i].byte_offset)
    }

    /// Clamp `offset` to the line and move it down to a grapheme start.
    pub fn snap_to_boundary(&self, line: usize, offset: usize) -> usize {
        let len = self.line_len(line);
        if offset >= len {
            return len;
        }
        let spans = self.spans(line);
        let idx = spans.partition_point(|s| s.byte_offset <= offset);
        idx.checked_sub(1).map_or(0, |i| spans[i].byte_offset)
    }

    /// Clamp `offset` to the line and move it up to the next grapheme boundary.
    pub fn snap_forward(&self, line: usize, offset: usize) -> usize {
        let len = self.line_len(line);
        if offset >= len {
            return len;
        }
        let spans = self.spans(line);
        let idx = spans.partition_point(|s| s.byte_offset < offset);
        spans.get(idx).map_or(len, |s| s.byte_offset)
    }

    /// Whether `offset` is a valid cursor position on `line`.
    pub fn is_grapheme_boundary(&self, line: usize, offset: usize) -> bool {
        offset <= self.line_len(line) && self.snap_to_boundary(line, offset) == offset
    }
}
