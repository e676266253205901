//! Cursor position and motion.
//!
//! A [`Cursor`] is a plain `(line, byte_offset)` pair. It does not hold a
//! reference to the document; the [`LineStore`] is passed to each motion.
//! The visual column is always derived from the current text, never stored,
//! so it cannot drift after an edit.

use crate::text::store::LineStore;

/// Logical cursor position.
///
/// Invariant: `byte_offset` is a grapheme start on `line`, or the line's
/// byte length (end-of-line).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cursor {
    /// Line index (0-based).
    pub line: usize,
    /// Byte offset within the line.
    pub byte_offset: usize,
}

/// Cursor position as reported to hosts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CursorPosition {
    pub line: usize,
    pub visual_column: usize,
    pub byte_offset: usize,
}

impl Cursor {
    /// Create a cursor at a position, without validation.
    #[must_use]
    pub const fn new(line: usize, byte_offset: usize) -> Self {
        Self { line, byte_offset }
    }

    /// Cursor at the start of the document.
    #[must_use]
    pub const fn start() -> Self {
        Self::new(0, 0)
    }

    /// Derive the reported position.
    pub fn position(&self, store: &LineStore) -> CursorPosition {
        CursorPosition {
            line: self.line,
            visual_column: self.visual_column(store),
            byte_offset: self.byte_offset,
        }
    }

    /// Visual column, computed from the line's layout.
    pub fn visual_column(&self, store: &LineStore) -> usize {
        store.to_visual_column(self.line, self.byte_offset)
    }

    /// Whether the cursor sits at end-of-line.
    pub fn at_line_end(&self, store: &LineStore) -> bool {
        self.byte_offset >= store.line_len(self.line)
    }

    /// Step one grapheme right, wrapping to the start of the next line.
    ///
    /// Returns `false` at the end of the document.
    pub fn move_right(&mut self, store: &LineStore) -> bool {
        if let Some(next) = store.next_grapheme_boundary(self.line, self.byte_offset) {
            self.byte_offset = next;
            true
        } else if self.line < store.last_line() {
            self.line += 1;
            self.byte_offset = 0;
            true
        } else {
            false
        }
    }

    /// Step one grapheme left, wrapping to the end of the previous line.
    ///
    /// Returns `false` at the start of the document.
    pub fn move_left(&mut self, store: &LineStore) -> bool {
        if let Some(prev) = store.prev_grapheme_boundary(self.line, self.byte_offset) {
            self.byte_offset = prev;
            true
        } else if self.line > 0 {
            self.line -= 1;
            self.byte_offset = store.line_len(self.line);
            true
        } else {
            false
        }
    }

    /// Move to the same visual column on the line above.
    pub fn move_up(&mut self, store: &LineStore) -> bool {
        if self.line == 0 {
            return false;
        }
        let column = self.visual_column(store);
        self.line -= 1;
        self.byte_offset = store.to_byte_offset(self.line, column);
        true
    }

    /// Move to the same visual column on the line below.
    pub fn move_down(&mut self, store: &LineStore) -> bool {
        if self.line >= store.last_line() {
            return false;
        }
        let column = self.visual_column(store);
        self.line += 1;
        self.byte_offset = store.to_byte_offset(self.line, column);
        true
    }

    /// Jump to the start of line `line` (clamped).
    pub fn goto_line(&mut self, store: &LineStore, line: usize) {
        self.line = store.clamp_line(line);
        self.byte_offset = 0;
    }

    /// Place the cursor at a byte offset, clamping and snapping down to a
    /// grapheme start.
    pub fn set(&mut self, store: &LineStore, line: usize, byte_offset: usize) {
        self.line = store.clamp_line(line);
        self.byte_offset = store.snap_to_boundary(self.line, byte_offset);
    }

    /// Place the cursor at a visual column; overshoot lands at end-of-line.
    pub fn set_line_col(&mut self, store: &LineStore, line: usize, column: usize) {
        self.line = store.clamp_line(line);
        self.byte_offset = store.to_byte_offset(self.line, column);
    }

    pub fn move_to_line_start(&mut self) {
        self.byte_offset = 0;
    }

    pub fn move_to_line_end(&mut self, store: &LineStore) {
        self.byte_offset = store.line_len(self.line);
    }

    /// Re-establish the invariant after the text under the cursor changed,
    /// moving forward onto the next grapheme boundary if needed.
    pub fn settle(&mut self, store: &LineStore) {
        self.line = store.clamp_line(self.line);
        self.byte_offset = store.snap_forward(self.line, self.byte_offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unicode::WidthConfig;

    fn store(text: &str) -> LineStore {
        LineStore::with_text(text, WidthConfig::default())
    }

    #[test]
    fn test_move_right_through_wide_chars() {
        let s = store("A🌟B");
        let mut c = Cursor::start();
        let mut cols = vec![c.visual_column(&s)];
        while c.move_right(&s) {
            cols.push(c.visual_column(&s));
        }
        assert_eq!(cols, vec![0, 1, 3, 4]);
    }

    #[test]
    fn test_move_right_wraps_lines() {
        let s = store("ab\nc");
        let mut c = Cursor::new(0, 2);
        assert!(c.move_right(&s));
        assert_eq!(c, Cursor::new(1, 0));
        assert!(c.move_right(&s));
        assert!(!c.move_right(&s));
        assert_eq!(c, Cursor::new(1, 1));
    }

    #[test]
    fn test_move_left_wraps_lines() {
        let s = store("ab\nc");
        let mut c = Cursor::new(1, 0);
        assert!(c.move_left(&s));
        assert_eq!(c, Cursor::new(0, 2));

        let mut c = Cursor::start();
        assert!(!c.move_left(&s));
        assert_eq!(c, Cursor::start());
    }

    #[test]
    fn test_vertical_motion_keeps_visual_column() {
        let s = store("世界世界\nabcdefgh\nxy");
        let mut c = Cursor::new(1, 3);
        assert!(c.move_up(&s));
        // Column 3 falls inside the second wide char, snap to its start
        assert_eq!(c, Cursor::new(0, 3));
        assert_eq!(c.visual_column(&s), 2);

        let mut c = Cursor::new(1, 6);
        assert!(c.move_down(&s));
        assert_eq!(c, Cursor::new(2, 2));

        assert!(!c.move_down(&s));
        let mut top = Cursor::new(0, 0);
        assert!(!top.move_up(&s));
    }

    #[test]
    fn test_set_clamps_and_snaps() {
        let s = store("a世b\nxyz");
        let mut c = Cursor::start();
        c.set(&s, 0, 2);
        assert_eq!(c, Cursor::new(0, 1));
        c.set(&s, 10, 100);
        assert_eq!(c, Cursor::new(1, 3));
    }

    #[test]
    fn test_set_line_col() {
        let s = store("Line 1\nLine 2\nLine 3");
        let mut c = Cursor::start();
        c.set_line_col(&s, 1, 3);
        assert_eq!(c.position(&s).line, 1);
        assert_eq!(c.position(&s).visual_column, 3);
        c.set_line_col(&s, 7, 1_000_000);
        assert_eq!(c, Cursor::new(2, 6));
    }

    #[test]
    fn test_goto_line() {
        let s = store("a\nbb\nccc");
        let mut c = Cursor::new(0, 1);
        c.goto_line(&s, 2);
        assert_eq!(c, Cursor::new(2, 0));
        c.goto_line(&s, 99);
        assert_eq!(c, Cursor::new(2, 0));
    }

    #[test]
    fn test_line_start_and_end() {
        let s = store("Hello World");
        let mut c = Cursor::start();
        c.move_to_line_end(&s);
        assert!(c.at_line_end(&s));
        assert_eq!(c.visual_column(&s), 11);
        c.move_to_line_start();
        assert_eq!(c.visual_column(&s), 0);
    }
}
