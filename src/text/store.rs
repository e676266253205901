//! Line-structured document storage.
//!
//! [`LineStore`] keeps the document as a `Vec<Line>`; line breaks are the
//! boundaries between entries, never bytes inside one. The store always holds
//! at least one (possibly empty) line.
//!
//! All line indices and byte offsets are clamped: an index past the end
//! addresses the last line, an offset past the end addresses end-of-line,
//! and an offset inside a UTF-8 sequence is moved down to its start.

use crate::text::breaks::split_lines;
use crate::text::line::Line;
use crate::unicode::{GraphemeSpan, WidthConfig};

/// The document: an ordered, never-empty sequence of lines.
///
/// Inserting raw text is crate-internal, so a line can never be handed a
/// break from outside:
///
/// ```compile_fail
/// use opentui_edit::{LineStore, WidthConfig};
///
/// let mut store = LineStore::with_text("ab", WidthConfig::default());
/// store.insert_bytes(0, 1, "\n");
/// ```
///
/// Text with breaks goes through [`EditBuffer`](crate::EditBuffer) instead:
///
/// ```
/// use opentui_edit::EditBuffer;
///
/// let mut buffer = EditBuffer::with_text("ab");
/// buffer.set_cursor(0, 1);
/// buffer.insert_text("\n");
/// assert_eq!(buffer.line_count(), 2);
/// assert_eq!(buffer.store().lines().collect::<Vec<_>>(), ["a", "b"]);
/// ```
#[derive(Clone, Debug)]
pub struct LineStore {
    lines: Vec<Line>,
    config: WidthConfig,
    revision: u64,
}

impl Default for LineStore {
    fn default() -> Self {
        Self::new(WidthConfig::default())
    }
}

impl LineStore {
    /// Create a store holding a single empty line.
    #[must_use]
    pub fn new(config: WidthConfig) -> Self {
        Self {
            lines: vec![Line::default()],
            config,
            revision: 0,
        }
    }

    /// Create a store from text, normalizing line breaks.
    #[must_use]
    pub fn with_text(text: &str, config: WidthConfig) -> Self {
        let mut store = Self::new(config);
        store.set_text(text);
        store
    }

    /// Width configuration used for layout.
    #[must_use]
    pub fn width_config(&self) -> &WidthConfig {
        &self.config
    }

    /// Change the width configuration, dropping every cached layout.
    ///
    /// Columns change under readers, so this counts as a revision.
    pub fn set_width_config(&mut self, config: WidthConfig) {
        if config == self.config {
            return;
        }
        self.config = config;
        for line in &mut self.lines {
            line.invalidate();
        }
        self.bump_revision();
    }

    /// Replace the whole document.
    ///
    /// `\r\n`, lone `\r` and lone `\n` each end a line.
    pub fn set_text(&mut self, text: &str) {
        self.lines = split_lines(text).into_iter().map(Line::new).collect();
        self.bump_revision();
    }

    /// The document text with every line joined by `\n`.
    ///
    /// This is a canonical form: `\r\n` and `\r` from the original input come
    /// back as `\n`.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::with_capacity(self.len_bytes());
        for (idx, line) in self.lines.iter().enumerate() {
            if idx > 0 {
                out.push('\n');
            }
            out.push_str(line.as_str());
        }
        out
    }

    /// Length of [`text`](Self::text) in bytes.
    #[must_use]
    pub fn len_bytes(&self) -> usize {
        self.lines.iter().map(Line::len).sum::<usize>() + self.lines.len() - 1
    }

    /// Whether the document is a single empty line.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// Number of lines (always at least one).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Index of the last line.
    #[must_use]
    pub fn last_line(&self) -> usize {
        self.lines.len() - 1
    }

    /// Clamp a line index into range.
    #[must_use]
    pub fn clamp_line(&self, line: usize) -> usize {
        line.min(self.last_line())
    }

    /// Content of a line, if it exists.
    #[must_use]
    pub fn line(&self, idx: usize) -> Option<&str> {
        self.lines.get(idx).map(Line::as_str)
    }

    /// Iterate over all line contents.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(Line::as_str)
    }

    /// Byte length of a line (clamped index).
    #[must_use]
    pub fn line_len(&self, idx: usize) -> usize {
        self.lines[self.clamp_line(idx)].len()
    }

    /// Grapheme layout of a line (clamped index), cached until the line changes.
    pub fn spans(&self, idx: usize) -> &[GraphemeSpan] {
        self.lines[self.clamp_line(idx)].spans(&self.config)
    }

    /// Display width of a line (clamped index).
    pub fn line_width(&self, idx: usize) -> usize {
        self.lines[self.clamp_line(idx)].width(&self.config)
    }

    /// Whether a line currently holds a cached layout.
    #[must_use]
    pub fn is_layout_cached(&self, idx: usize) -> bool {
        self.lines
            .get(idx)
            .is_some_and(Line::is_layout_cached)
    }

    /// Content revision, bumped on every mutation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Split line `idx` at `offset`; the tail becomes a new line right after it.
    pub fn split_line(&mut self, idx: usize, offset: usize) {
        let idx = self.clamp_line(idx);
        let tail = self.lines[idx].split_off(offset);
        self.lines.insert(idx + 1, tail);
        self.bump_revision();
    }

    /// Append line `idx + 1` onto line `idx` and remove it.
    ///
    /// Returns `false` (and changes nothing) when `idx` is the last line.
    pub fn merge_lines(&mut self, idx: usize) -> bool {
        if idx >= self.last_line() {
            return false;
        }
        let next = self.lines.remove(idx + 1);
        self.lines[idx].push_str(next.as_str());
        self.bump_revision();
        true
    }

    /// Delete line `idx` outright. The only line is emptied instead.
    pub fn remove_line(&mut self, idx: usize) {
        let idx = self.clamp_line(idx);
        if self.lines.len() == 1 {
            self.lines[0] = Line::default();
        } else {
            self.lines.remove(idx);
        }
        self.bump_revision();
    }

    /// Insert lines (break-free contents) after line `idx`.
    pub(crate) fn insert_lines_after<'a, I>(&mut self, idx: usize, contents: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let at = self.clamp_line(idx) + 1;
        let new_lines: Vec<Line> = contents.into_iter().map(Line::new).collect();
        if new_lines.is_empty() {
            return;
        }
        self.lines.splice(at..at, new_lines);
        self.bump_revision();
    }

    /// Insert break-free `text` into line `idx` at byte `offset`.
    ///
    /// Text with breaks goes through `EditBuffer::insert_text`, which splits
    /// it into lines.
    pub(crate) fn insert_bytes(&mut self, idx: usize, offset: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        let idx = self.clamp_line(idx);
        self.lines[idx].insert_str(offset, text);
        self.bump_revision();
    }

    /// Remove bytes `start..end` from line `idx`, returning the removed text.
    pub fn delete_byte_range(&mut self, idx: usize, start: usize, end: usize) -> String {
        let idx = self.clamp_line(idx);
        let removed = self.lines[idx].remove_range(start, end);
        if !removed.is_empty() {
            self.bump_revision();
        }
        removed
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
