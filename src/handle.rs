//! Host-facing edit buffer handle with an explicit lifecycle.
//!
//! [`EditBufferHandle`] is created with [`EditBufferHandle::create`] and
//! released with [`EditBufferHandle::destroy`]. Every call after destroy,
//! reads included, fails with [`Error::Destroyed`] and the handle stays
//! destroyed for good.
//!
//! ```
//! use opentui_edit::{EditBufferHandle, Error};
//! use opentui_edit::unicode::WidthConfig;
//!
//! let mut handle = EditBufferHandle::create(WidthConfig::default());
//! handle.set_text("Hello")?;
//! handle.set_cursor_to_line_col(0, 5)?;
//! handle.insert_text(" World")?;
//! assert_eq!(handle.get_text()?, "Hello World");
//!
//! handle.destroy()?;
//! assert_eq!(handle.get_text(), Err(Error::Destroyed));
//! # Ok::<(), Error>(())
//! ```

use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log};
use crate::text::{CursorPosition, EditBuffer, LineStore};
use crate::unicode::WidthConfig;

/// Lifecycle state of an edit buffer.
#[derive(Clone, Debug)]
pub enum BufferState {
    Live(Box<EditBuffer>),
    Destroyed,
}

impl BufferState {
    /// A live state around a fresh, empty buffer.
    #[must_use]
    pub fn live(config: WidthConfig) -> Self {
        Self::Live(Box::new(EditBuffer::with_config(config)))
    }

    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }

    /// Borrow the buffer, or fail if destroyed.
    pub fn get(&self) -> Result<&EditBuffer> {
        match self {
            Self::Live(buffer) => Ok(buffer),
            Self::Destroyed => Err(rejected()),
        }
    }

    /// Mutably borrow the buffer, or fail if destroyed.
    pub fn get_mut(&mut self) -> Result<&mut EditBuffer> {
        match self {
            Self::Live(buffer) => Ok(buffer),
            Self::Destroyed => Err(rejected()),
        }
    }

    /// Release the buffer. Destroying twice is an error like any other call.
    pub fn destroy(&mut self) -> Result<()> {
        match std::mem::replace(self, Self::Destroyed) {
            Self::Live(_) => Ok(()),
            Self::Destroyed => Err(rejected()),
        }
    }
}

fn rejected() -> Error {
    emit_log(LogLevel::Warn, "rejected call on destroyed edit buffer");
    Error::Destroyed
}

/// Owning handle over one edit buffer.
///
/// Each method runs the matching [`EditBuffer`] operation after checking the
/// lifecycle state.
#[derive(Clone, Debug)]
pub struct EditBufferHandle {
    state: BufferState,
}

impl EditBufferHandle {
    /// Create a live handle with an empty document.
    #[must_use]
    pub fn create(config: WidthConfig) -> Self {
        emit_log(
            LogLevel::Debug,
            &format!("edit buffer created ({})", config.method.as_str()),
        );
        Self {
            state: BufferState::live(config),
        }
    }

    /// Release the buffer. All later calls fail with [`Error::Destroyed`].
    pub fn destroy(&mut self) -> Result<()> {
        self.state.destroy()?;
        emit_log(LogLevel::Debug, "edit buffer destroyed");
        Ok(())
    }

    #[must_use]
    pub const fn is_destroyed(&self) -> bool {
        !self.state.is_live()
    }

    /// Borrow the underlying buffer.
    pub fn buffer(&self) -> Result<&EditBuffer> {
        self.state.get()
    }

    /// Read-only view of the line storage.
    ///
    /// The borrow ends before any mutation can run, so the view can never
    /// observe a half-applied edit.
    pub fn storage(&self) -> Result<&LineStore> {
        Ok(self.state.get()?.store())
    }

    pub fn set_text(&mut self, text: &str) -> Result<()> {
        self.state.get_mut()?.set_text(text);
        Ok(())
    }

    pub fn get_text(&self) -> Result<String> {
        Ok(self.state.get()?.text())
    }

    pub fn get_cursor_position(&self) -> Result<CursorPosition> {
        Ok(self.state.get()?.cursor_position())
    }

    pub fn move_cursor_left(&mut self) -> Result<()> {
        self.state.get_mut()?.move_cursor_left();
        Ok(())
    }

    pub fn move_cursor_right(&mut self) -> Result<()> {
        self.state.get_mut()?.move_cursor_right();
        Ok(())
    }

    pub fn move_cursor_up(&mut self) -> Result<()> {
        self.state.get_mut()?.move_cursor_up();
        Ok(())
    }

    pub fn move_cursor_down(&mut self) -> Result<()> {
        self.state.get_mut()?.move_cursor_down();
        Ok(())
    }

    pub fn goto_line(&mut self, line: usize) -> Result<()> {
        self.state.get_mut()?.goto_line(line);
        Ok(())
    }

    pub fn set_cursor(&mut self, line: usize, byte_offset: usize) -> Result<()> {
        self.state.get_mut()?.set_cursor(line, byte_offset);
        Ok(())
    }

    pub fn set_cursor_to_line_col(&mut self, line: usize, visual_column: usize) -> Result<()> {
        self.state
            .get_mut()?
            .set_cursor_to_line_col(line, visual_column);
        Ok(())
    }

    pub fn insert_char(&mut self, ch: char) -> Result<()> {
        self.state.get_mut()?.insert_char(ch);
        Ok(())
    }

    pub fn insert_text(&mut self, text: &str) -> Result<()> {
        self.state.get_mut()?.insert_text(text);
        Ok(())
    }

    pub fn new_line(&mut self) -> Result<()> {
        self.state.get_mut()?.new_line();
        Ok(())
    }

    pub fn delete_char(&mut self) -> Result<()> {
        self.state.get_mut()?.delete_char();
        Ok(())
    }

    pub fn delete_char_backward(&mut self) -> Result<()> {
        self.state.get_mut()?.delete_char_backward();
        Ok(())
    }

    pub fn delete_to_line_end(&mut self) -> Result<()> {
        self.state.get_mut()?.delete_to_line_end();
        Ok(())
    }

    pub fn delete_line(&mut self) -> Result<()> {
        self.state.get_mut()?.delete_line();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_handle_edits() {
        let mut handle = EditBufferHandle::create(WidthConfig::default());
        handle.set_text("Line 1\nLine 2").unwrap();
        handle.set_cursor_to_line_col(1, 0).unwrap();
        handle.delete_char_backward().unwrap();
        assert_eq!(handle.get_text().unwrap(), "Line 1Line 2");
        let pos = handle.get_cursor_position().unwrap();
        assert_eq!((pos.line, pos.visual_column), (0, 6));
    }

    #[test]
    fn test_destroyed_handle_rejects_everything() {
        let mut handle = EditBufferHandle::create(WidthConfig::default());
        handle.set_text("Test").unwrap();
        handle.destroy().unwrap();
        assert!(handle.is_destroyed());

        assert_eq!(handle.get_text(), Err(Error::Destroyed));
        assert_eq!(handle.insert_text("x"), Err(Error::Destroyed));
        assert_eq!(handle.move_cursor_left(), Err(Error::Destroyed));
        assert_eq!(handle.get_cursor_position(), Err(Error::Destroyed));
        assert!(handle.storage().is_err());
        assert_eq!(handle.destroy(), Err(Error::Destroyed));
        // Still destroyed after repeated failures
        assert_eq!(handle.get_text(), Err(Error::Destroyed));
    }

    #[test]
    fn test_state_transitions() {
        let mut state = BufferState::live(WidthConfig::default());
        assert!(state.is_live());
        state.get_mut().unwrap().insert_text("abc");
        assert_eq!(state.get().unwrap().text(), "abc");
        state.destroy().unwrap();
        assert!(!state.is_live());
        assert!(matches!(state.get(), Err(Error::Destroyed)));
    }
}
