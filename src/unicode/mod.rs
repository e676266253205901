//! Unicode utilities for grapheme handling and display width.

mod grapheme;
mod width;

pub use grapheme::{GraphemeSpan, grapheme_spans, graphemes};
pub use width::{
    DEFAULT_TAB_WIDTH, TabPolicy, WidthConfig, WidthMethod, display_width_char_with_method,
    display_width_with_method,
};
