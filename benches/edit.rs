//! Edit buffer performance benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{Criterion, criterion_group, criterion_main};
use opentui_edit::{EditBuffer, LineStore, WidthConfig, WidthMethod};
use std::hint::black_box;

fn mixed_document(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("Line {i}: 世界 café 🌟 tab\there e\u{0301}\n"))
        .collect()
}

fn buffer_creation(c: &mut Criterion) {
    c.bench_function("editbuffer_new", |b| {
        b.iter(|| EditBuffer::new());
    });

    c.bench_function("editbuffer_with_text_short", |b| {
        b.iter(|| EditBuffer::with_text(black_box("Hello, World!")));
    });

    let long_line = "x".repeat(10_000);
    c.bench_function("editbuffer_with_text_10k", |b| {
        b.iter(|| EditBuffer::with_text(black_box(&long_line)));
    });

    let crlf = "row\r\n".repeat(2_000);
    c.bench_function("editbuffer_set_text_crlf_2k_lines", |b| {
        let mut buffer = EditBuffer::new();
        b.iter(|| buffer.set_text(black_box(&crlf)));
    });
}

fn coordinate_mapping(c: &mut Criterion) {
    let store = LineStore::with_text(&mixed_document(100), WidthConfig::default());
    let len = store.line_len(50);

    c.bench_function("mapper_to_visual_column_cached", |b| {
        b.iter(|| store.to_visual_column(black_box(50), black_box(len)));
    });

    c.bench_function("mapper_to_byte_offset_cached", |b| {
        b.iter(|| store.to_byte_offset(black_box(50), black_box(20)));
    });

    let long = LineStore::with_text(&"世界🌟ab".repeat(2_000), WidthConfig::default());
    c.bench_function("mapper_to_byte_offset_long_line", |b| {
        b.iter(|| long.to_byte_offset(black_box(0), black_box(9_000)));
    });

    c.bench_function("mapper_relayout_after_width_change", |b| {
        let mut store = LineStore::with_text(&mixed_document(100), WidthConfig::default());
        let mut method = WidthMethod::Unicode;
        b.iter(|| {
            store.set_width_config(WidthConfig::new(method));
            method = match method {
                WidthMethod::Unicode => WidthMethod::WcWidth,
                WidthMethod::WcWidth => WidthMethod::Unicode,
            };
            black_box(store.line_width(50))
        });
    });
}

fn insertion(c: &mut Criterion) {
    c.bench_function("editbuffer_insert_char", |b| {
        let mut buffer = EditBuffer::new();
        b.iter(|| buffer.insert_char(black_box('x')));
    });

    c.bench_function("editbuffer_insert_wide_char", |b| {
        let mut buffer = EditBuffer::new();
        b.iter(|| buffer.insert_char(black_box('世')));
    });

    c.bench_function("editbuffer_insert_multiline", |b| {
        let mut buffer = EditBuffer::new();
        b.iter(|| buffer.insert_text(black_box("first\nmiddle\nlast")));
    });
}

fn cursor_movement(c: &mut Criterion) {
    let mut buffer = EditBuffer::with_text(&mixed_document(100));
    buffer.set_cursor_to_line_col(50, 10);

    c.bench_function("editbuffer_move_left_right", |b| {
        b.iter(|| {
            buffer.move_cursor_left();
            buffer.move_cursor_right();
        });
    });

    c.bench_function("editbuffer_move_up_down", |b| {
        b.iter(|| {
            buffer.move_cursor_up();
            buffer.move_cursor_down();
        });
    });

    c.bench_function("editbuffer_cursor_position", |b| {
        b.iter(|| black_box(buffer.cursor_position()));
    });
}

fn deletion(c: &mut Criterion) {
    c.bench_function("editbuffer_delete_backward", |b| {
        let mut buffer = EditBuffer::with_text(&"x".repeat(10_000));
        buffer.move_to_line_end();
        b.iter(|| {
            if buffer.cursor().byte_offset > 0 {
                buffer.delete_char_backward();
            } else {
                buffer.set_text(&"x".repeat(10_000));
                buffer.move_to_line_end();
            }
        });
    });

    c.bench_function("editbuffer_newline_backspace_cycle", |b| {
        let mut buffer = EditBuffer::with_text(&mixed_document(100));
        buffer.set_cursor_to_line_col(50, 8);
        b.iter(|| {
            buffer.new_line();
            buffer.delete_char_backward();
        });
    });
}

criterion_group!(
    benches,
    buffer_creation,
    coordinate_mapping,
    insertion,
    cursor_movement,
    deletion
);
criterion_main!(benches);
