//! Editable text buffer with a grapheme-aware cursor.
//!
//! This module provides [`EditBuffer`], which pairs a [`LineStore`] with a
//! [`Cursor`] and keeps the two consistent across every edit.
//!
//! # Examples
//!
//! ```
//! use opentui_edit::EditBuffer;
//!
//! let mut buf = EditBuffer::with_text("HelloWorld");
//! buf.set_cursor_to_line_col(0, 5);
//! buf.new_line();
//! assert_eq!(buf.text(), "Hello\nWorld");
//!
//! // Backspace at the start of a line joins it onto the previous one
//! buf.delete_char_backward();
//! assert_eq!(buf.text(), "HelloWorld");
//! assert_eq!(buf.cursor_position().visual_column, 5);
//! ```

use crate::event::{LogLevel, emit_log};
use crate::text::breaks::{LineEnding, has_break, split_lines};
use crate::text::cursor::{Cursor, CursorPosition};
use crate::text::store::LineStore;
use crate::unicode::WidthConfig;

/// Text buffer with editing operations and a cursor.
///
/// `EditBuffer` owns the document and the cursor and provides:
///
/// - **Cursor movement**: graphemes, lines, line bounds, absolute positions
/// - **Text editing**: insert (single and multi-line), delete, backspace
/// - **Line operations**: split on newline, merge on delete/backspace, delete line
///
/// Coordinates passed in are never rejected; they are clamped to the nearest
/// valid position.
#[derive(Clone, Debug, Default)]
pub struct EditBuffer {
    store: LineStore,
    cursor: Cursor,
    line_ending: LineEnding,
}

impl EditBuffer {
    /// Create a new empty edit buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty edit buffer with a width configuration.
    #[must_use]
    pub fn with_config(config: WidthConfig) -> Self {
        Self {
            store: LineStore::new(config),
            cursor: Cursor::start(),
            line_ending: LineEnding::None,
        }
    }

    /// Create an edit buffer with initial text.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        let mut buf = Self::new();
        buf.set_text(text);
        buf
    }

    /// Get the underlying line store.
    #[must_use]
    pub fn store(&self) -> &LineStore {
        &self.store
    }

    /// Width configuration in use.
    #[must_use]
    pub fn width_config(&self) -> &WidthConfig {
        self.store.width_config()
    }

    /// Change the width configuration. The cursor keeps its byte position.
    pub fn set_width_config(&mut self, config: WidthConfig) {
        self.store.set_width_config(config);
    }

    /// Get the full text, lines joined by `\n`.
    #[must_use]
    pub fn text(&self) -> String {
        self.store.text()
    }

    /// Replace the entire text and move the cursor to the start.
    pub fn set_text(&mut self, text: &str) {
        self.line_ending = LineEnding::detect(text);
        self.store.set_text(text);
        self.cursor = Cursor::start();
        emit_log(
            LogLevel::Debug,
            &format!(
                "edit buffer loaded {} bytes in {} lines ({:?} breaks)",
                text.len(),
                self.store.line_count(),
                self.line_ending
            ),
        );
    }

    /// Break style detected by the last [`set_text`](Self::set_text).
    #[must_use]
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Number of lines (at least one).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.store.line_count()
    }

    /// Whether the document holds no text at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Content of a line, if it exists.
    #[must_use]
    pub fn line(&self, idx: usize) -> Option<&str> {
        self.store.line(idx)
    }

    /// Content revision, bumped on every text mutation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.store.revision()
    }

    // ---------------------------------------------------------------------
    // Cursor
    // ---------------------------------------------------------------------

    /// Logical cursor.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Cursor line and derived visual column.
    #[must_use]
    pub fn cursor_position(&self) -> CursorPosition {
        self.cursor.position(&self.store)
    }

    /// Move one grapheme left, wrapping to the end of the previous line.
    pub fn move_cursor_left(&mut self) {
        self.cursor.move_left(&self.store);
    }

    /// Move one grapheme right, wrapping to the start of the next line.
    pub fn move_cursor_right(&mut self) {
        self.cursor.move_right(&self.store);
    }

    /// Move to the same visual column on the previous line.
    pub fn move_cursor_up(&mut self) {
        self.cursor.move_up(&self.store);
    }

    /// Move to the same visual column on the next line.
    pub fn move_cursor_down(&mut self) {
        self.cursor.move_down(&self.store);
    }

    /// Move cursor to start of line.
    pub fn move_to_line_start(&mut self) {
        self.cursor.move_to_line_start();
    }

    /// Move cursor to end of line.
    pub fn move_to_line_end(&mut self) {
        self.cursor.move_to_line_end(&self.store);
    }

    /// Jump to the start of a line (clamped).
    pub fn goto_line(&mut self, line: usize) {
        self.cursor.goto_line(&self.store, line);
    }

    /// Set the cursor by line and byte offset, snapping to a grapheme start.
    pub fn set_cursor(&mut self, line: usize, byte_offset: usize) {
        self.cursor.set(&self.store, line, byte_offset);
    }

    /// Set the cursor by line and visual column.
    pub fn set_cursor_to_line_col(&mut self, line: usize, visual_column: usize) {
        self.cursor.set_line_col(&self.store, line, visual_column);
    }

    // ---------------------------------------------------------------------
    // Editing
    // ---------------------------------------------------------------------

    /// Insert a single character at the cursor.
    pub fn insert_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.insert_text(ch.encode_utf8(&mut buf));
    }

    /// Insert text at the cursor; the cursor ends up after the inserted text.
    ///
    /// Text holding line breaks splits the current line: the first fragment
    /// extends the head, middle fragments become whole lines, and the last
    /// fragment is prepended to the tail.
    pub fn insert_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let Cursor { line, byte_offset } = self.cursor;

        if !has_break(text) {
            self.store.insert_bytes(line, byte_offset, text);
            self.cursor.byte_offset = byte_offset + text.len();
            self.cursor.settle(&self.store);
            return;
        }

        let fragments = split_lines(text);
        let last = fragments.len() - 1;
        self.store.split_line(line, byte_offset);
        self.store.insert_bytes(line, byte_offset, fragments[0]);
        self.store
            .insert_lines_after(line, fragments[1..last].iter().copied());
        let tail_line = line + last;
        self.store.insert_bytes(tail_line, 0, fragments[last]);

        self.cursor = Cursor::new(tail_line, fragments[last].len());
        self.cursor.settle(&self.store);
    }

    /// Split the current line at the cursor.
    pub fn new_line(&mut self) {
        self.insert_text("\n");
    }

    /// Delete the grapheme under the cursor, or join the next line at end-of-line.
    pub fn delete_char(&mut self) {
        let Cursor { line, byte_offset } = self.cursor;
        match self.store.next_grapheme_boundary(line, byte_offset) {
            Some(end) => {
                self.store.delete_byte_range(line, byte_offset, end);
            }
            None => {
                self.store.merge_lines(line);
            }
        }
        self.cursor.settle(&self.store);
    }

    /// Delete the grapheme before the cursor, or join onto the previous line
    /// at start-of-line.
    pub fn delete_char_backward(&mut self) {
        let Cursor { line, byte_offset } = self.cursor;
        match self.store.prev_grapheme_boundary(line, byte_offset) {
            Some(start) => {
                self.store.delete_byte_range(line, start, byte_offset);
                self.cursor.byte_offset = start;
            }
            None if line > 0 => {
                let join = self.store.line_len(line - 1);
                self.store.merge_lines(line - 1);
                self.cursor = Cursor::new(line - 1, join);
            }
            None => return,
        }
        self.cursor.settle(&self.store);
    }

    /// Delete from the cursor to end-of-line. Does nothing at end-of-line.
    pub fn delete_to_line_end(&mut self) {
        let Cursor { line, byte_offset } = self.cursor;
        let end = self.store.line_len(line);
        self.store.delete_byte_range(line, byte_offset, end);
        self.cursor.settle(&self.store);
    }

    /// Remove the cursor's line; the cursor goes to the start of the line
    /// that takes its place (or the new last line).
    pub fn delete_line(&mut self) {
        let line = self.cursor.line;
        self.store.remove_line(line);
        self.cursor = Cursor::new(self.store.clamp_line(line), 0);
    }
}
