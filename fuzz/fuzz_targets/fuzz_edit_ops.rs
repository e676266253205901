//! Fuzz target for edit buffer operation sequences.
//!
//! Replays arbitrary edits and cursor moves against an arbitrary document and
//! checks that the cursor always stays on a grapheme boundary of a real line.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use opentui_edit::{EditBuffer, TabPolicy, WidthConfig, WidthMethod};

#[derive(Arbitrary, Debug)]
struct EditSession {
    text: String,
    unicode_width: bool,
    tab_stops: bool,
    tab_width: u8,
    ops: Vec<Op>,
}

#[derive(Arbitrary, Debug)]
enum Op {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    GotoLine(u16),
    SetCursor { line: u16, byte_offset: u16 },
    SetColumn { line: u16, column: u16 },
    InsertChar(char),
    InsertText(String),
    NewLine,
    Delete,
    Backspace,
    DeleteToLineEnd,
    DeleteLine,
    SetText(String),
}

fuzz_target!(|session: EditSession| {
    let method = if session.unicode_width {
        WidthMethod::Unicode
    } else {
        WidthMethod::WcWidth
    };
    let policy = if session.tab_stops {
        TabPolicy::Stops
    } else {
        TabPolicy::Flat
    };
    let config = WidthConfig::new(method)
        .with_tab_width(session.tab_width)
        .with_tab_policy(policy);

    let mut buffer = EditBuffer::with_config(config);
    buffer.set_text(&session.text);

    for op in session.ops.into_iter().take(256) {
        match op {
            Op::Left => buffer.move_cursor_left(),
            Op::Right => buffer.move_cursor_right(),
            Op::Up => buffer.move_cursor_up(),
            Op::Down => buffer.move_cursor_down(),
            Op::LineStart => buffer.move_to_line_start(),
            Op::LineEnd => buffer.move_to_line_end(),
            Op::GotoLine(line) => buffer.goto_line(line.into()),
            Op::SetCursor { line, byte_offset } => {
                buffer.set_cursor(line.into(), byte_offset.into());
            }
            Op::SetColumn { line, column } => {
                buffer.set_cursor_to_line_col(line.into(), column.into());
            }
            Op::InsertChar(ch) => buffer.insert_char(ch),
            Op::InsertText(text) => buffer.insert_text(&text),
            Op::NewLine => buffer.new_line(),
            Op::Delete => buffer.delete_char(),
            Op::Backspace => buffer.delete_char_backward(),
            Op::DeleteToLineEnd => buffer.delete_to_line_end(),
            Op::DeleteLine => buffer.delete_line(),
            Op::SetText(text) => buffer.set_text(&text),
        }

        let cursor = buffer.cursor();
        let store = buffer.store();
        assert!(cursor.line < store.line_count());
        assert!(store.is_grapheme_boundary(cursor.line, cursor.byte_offset));
        assert!(store.lines().all(|l| !l.contains(['\n', '\r'])));

        // Cursor column lies within the line
        let column = store.to_visual_column(cursor.line, cursor.byte_offset);
        assert!(column <= store.line_width(cursor.line));
    }
});
