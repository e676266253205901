//! Line-structured text storage, cursor motion and editing.
//!
//! Three coordinate systems meet here: byte offsets within a line, grapheme
//! cluster boundaries, and visual (terminal cell) columns. The cursor is
//! stored in bytes and everything else is derived from each line's cached
//! grapheme layout.
//!
//! Key types:
//!
//! - [`LineStore`]: the document, a never-empty list of break-free lines
//! - [`Cursor`]: logical `(line, byte_offset)` position with motion helpers
//! - [`EditBuffer`]: store + cursor with insert/delete/newline operations
//! - [`LineEnding`]: break style detection for loaded text
//!
//! # Examples
//!
//! ```
//! use opentui_edit::EditBuffer;
//!
//! let mut editor = EditBuffer::with_text("A🌟B");
//! editor.move_cursor_right();
//! editor.move_cursor_right();
//! // The star is two cells wide
//! assert_eq!(editor.cursor_position().visual_column, 3);
//! ```

mod breaks;
mod cursor;
mod edit;
mod line;
mod mapper;
mod store;

pub use breaks::{LineEnding, count_breaks, split_lines};
pub use cursor::{Cursor, CursorPosition};
pub use edit::EditBuffer;
pub use store::LineStore;
