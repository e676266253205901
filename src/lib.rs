//! `opentui_edit` - Display-width-aware edit buffer for terminal text inputs
//!
//! The editing core behind OpenTUI's textarea and input widgets: a
//! line-structured document, a cursor that moves by grapheme cluster, and
//! edit primitives that keep the two consistent. Positions translate between
//! byte offsets, grapheme boundaries and visual columns, with CJK, emoji,
//! combining marks and tabs measured the way a terminal draws them.
//!
//! Rendering, key decoding, undo history and persistence live elsewhere.
//!
//! # Example
//!
//! ```
//! use opentui_edit::EditBuffer;
//!
//! let mut buffer = EditBuffer::with_text("世界");
//! buffer.set_cursor_to_line_col(0, 2);
//! buffer.insert_text("X");
//! assert_eq!(buffer.text(), "世X界");
//! ```

// Crate-level lint configuration
#![allow(clippy::cast_possible_truncation)] // Slot indices fit in u32
#![allow(clippy::module_name_repetitions)] // Allow EditBuffer in text::edit etc
#![allow(clippy::missing_errors_doc)] // Every fallible call fails only on destroyed buffers
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::must_use_candidate)] // Getters are obvious enough
#![allow(clippy::return_self_not_must_use)] // Builder methods are marked individually
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference
#![allow(clippy::needless_collect)] // Collect for assertions is clear
#![allow(clippy::redundant_pub_crate)] // Raw store mutators are marked crate-internal explicitly

pub mod error;
pub mod event;
pub mod handle;
pub mod registry;
pub mod text;
pub mod unicode;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use event::{
    LogLevel, clear_event_callback, clear_log_callback, emit_event, emit_log, set_event_callback,
    set_log_callback,
};
pub use handle::{BufferState, EditBufferHandle};
pub use registry::{BufferId, BufferRegistry, StorageRef};
pub use text::{Cursor, CursorPosition, EditBuffer, LineEnding, LineStore};
pub use unicode::{TabPolicy, WidthConfig, WidthMethod};
