//! Grapheme cluster iteration and per-line layout spans.

use crate::unicode::width::WidthConfig;
use unicode_segmentation::{Graphemes, UnicodeSegmentation};

/// One user-perceived character within a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphemeSpan {
    /// Byte offset of the cluster start within the line.
    pub byte_offset: usize,
    /// Length of the cluster in bytes.
    pub byte_len: usize,
    /// Visual column where the cluster starts.
    pub col_offset: usize,
    /// Display width in columns.
    pub width: usize,
}

impl GraphemeSpan {
    /// Byte offset just past this cluster.
    #[must_use]
    pub const fn byte_end(&self) -> usize {
        self.byte_offset + self.byte_len
    }

    /// Visual column just past this cluster.
    #[must_use]
    pub const fn col_end(&self) -> usize {
        self.col_offset + self.width
    }
}

/// Iterate over extended grapheme clusters in a string.
#[must_use]
pub fn graphemes(s: &str) -> Graphemes<'_> {
    s.graphemes(true)
}

/// Lay out a line of text as grapheme spans.
///
/// Columns accumulate left to right, so tab-stop widths see the column the
/// tab actually starts at.
#[must_use]
pub fn grapheme_spans(s: &str, config: &WidthConfig) -> Vec<GraphemeSpan> {
    let mut spans = Vec::new();
    let mut col = 0usize;

    for (byte_offset, grapheme) in s.grapheme_indices(true) {
        let width = config.grapheme_width(grapheme, col);
        spans.push(GraphemeSpan {
            byte_offset,
            byte_len: grapheme.len(),
            col_offset: col,
            width,
        });
        col += width;
    }

    // The layout is cached for the life of the line
    spans.shrink_to_fit();
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unicode::width::TabPolicy;

    #[test]
    fn test_graphemes_ascii() {
        let g: Vec<_> = graphemes("hello").collect();
        assert_eq!(g, vec!["h", "e", "l", "l", "o"]);
    }

    #[test]
    fn test_graphemes_emoji() {
        // Family emoji (ZWJ sequence)
        assert_eq!(graphemes("👨‍👩‍👧").count(), 1);
    }

    #[test]
    fn test_graphemes_combining() {
        assert_eq!(graphemes("e\u{0301}").count(), 1);
    }

    #[test]
    fn test_graphemes_crlf_is_one_cluster() {
        assert_eq!(graphemes("\r\n").count(), 1);
    }

    #[test]
    fn test_spans_mixed_width() {
        let spans = grapheme_spans("A世🌟B", &WidthConfig::default());
        let cols: Vec<_> = spans.iter().map(|s| (s.byte_offset, s.col_offset, s.width)).collect();
        assert_eq!(cols, vec![(0, 0, 1), (1, 1, 2), (4, 3, 2), (8, 5, 1)]);
        assert_eq!(spans[3].byte_end(), 9);
        assert_eq!(spans[3].col_end(), 6);
    }

    #[test]
    fn test_spans_combining_mark_joins_base() {
        let spans = grapheme_spans("e\u{0301}x", &WidthConfig::default());
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].byte_len, 3);
        assert_eq!(spans[0].width, 1);
        assert_eq!(spans[1].col_offset, 1);
    }

    #[test]
    fn test_spans_tab_policies() {
        let flat = grapheme_spans("ab\tc", &WidthConfig::default().with_tab_width(4));
        assert_eq!(flat[2].width, 4);
        assert_eq!(flat[3].col_offset, 6);

        let stops = WidthConfig::default()
            .with_tab_width(4)
            .with_tab_policy(TabPolicy::Stops);
        let spans = grapheme_spans("ab\tc", &stops);
        assert_eq!(spans[2].width, 2);
        assert_eq!(spans[3].col_offset, 4);
    }

    #[test]
    fn test_spans_do_not_reserve_per_byte() {
        let text = "世界世界🌟🌟";
        let spans = grapheme_spans(text, &WidthConfig::default());
        assert_eq!(spans.len(), 6);
        assert!(spans.capacity() < text.len(), "capacity {}", spans.capacity());
    }

    #[test]
    fn test_graphemes_reverse() {
        let g: Vec<_> = graphemes("a世e\u{0301}").rev().collect();
        assert_eq!(g, vec!["e\u{0301}", "世", "a"]);
    }

    #[test]
    fn test_spans_empty() {
        assert!(grapheme_spans("", &WidthConfig::default()).is_empty());
    }
}
