//! Line-break normalization.
//!
//! Text entering the buffer is split on `\r\n`, lone `\r` and lone `\n`,
//! each counting as exactly one break. Lines never hold break characters.

/// Break style found in a piece of text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineEnding {
    /// No line breaks at all.
    #[default]
    None,
    /// `\n` only.
    Lf,
    /// `\r\n` only.
    CrLf,
    /// Lone `\r` only.
    Cr,
    /// More than one style.
    Mixed,
}

impl LineEnding {
    /// Detect the break style used in `text`.
    ///
    /// ```
    /// use opentui_edit::text::LineEnding;
    ///
    /// assert_eq!(LineEnding::detect("a\r\nb"), LineEnding::CrLf);
    /// assert_eq!(LineEnding::detect("a\nb\rc"), LineEnding::Mixed);
    /// ```
    #[must_use]
    pub fn detect(text: &str) -> Self {
        let mut found = Self::None;
        for ending in breaks(text).map(|(_, ending)| ending) {
            found = match found {
                Self::None => ending,
                seen if seen == ending => seen,
                _ => return Self::Mixed,
            };
        }
        found
    }

    /// The canonical separator this style stands for.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CrLf => "\r\n",
            Self::Cr => "\r",
            Self::None | Self::Lf | Self::Mixed => "\n",
        }
    }
}

/// Iterate over `(byte_offset, style)` of every break in `text`.
fn breaks(text: &str) -> impl Iterator<Item = (usize, LineEnding)> + '_ {
    let bytes = text.as_bytes();
    let mut idx = 0;
    std::iter::from_fn(move || {
        while idx < bytes.len() {
            let start = idx;
            match bytes[idx] {
                b'\r' if bytes.get(idx + 1) == Some(&b'\n') => {
                    idx += 2;
                    return Some((start, LineEnding::CrLf));
                }
                b'\r' => {
                    idx += 1;
                    return Some((start, LineEnding::Cr));
                }
                b'\n' => {
                    idx += 1;
                    return Some((start, LineEnding::Lf));
                }
                _ => idx += 1,
            }
        }
        None
    })
}

/// Split `text` into line contents. Always yields at least one (possibly empty) line.
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut line_start = 0;
    for (offset, ending) in breaks(text) {
        lines.push(&text[line_start..offset]);
        line_start = offset + if ending == LineEnding::CrLf { 2 } else { 1 };
    }
    lines.push(&text[line_start..]);
    lines
}

/// Number of line breaks in `text`.
#[must_use]
pub fn count_breaks(text: &str) -> usize {
    breaks(text).count()
}

/// Whether `text` holds any break character.
#[must_use]
pub fn has_break(text: &str) -> bool {
    text.bytes().any(|b| b == b'\n' || b == b'\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain() {
        assert_eq!(split_lines("hello"), vec!["hello"]);
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn test_split_each_style() {
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\r\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\rb"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_mixed() {
        let lines = split_lines("Line 1\nLine 2\rLine 3\r\nLine 4");
        assert_eq!(lines, vec!["Line 1", "Line 2", "Line 3", "Line 4"]);
    }

    #[test]
    fn test_split_consecutive_and_trailing() {
        assert_eq!(split_lines("A\n\n\nB"), vec!["A", "", "", "B"]);
        assert_eq!(split_lines("\n"), vec!["", ""]);
        assert_eq!(split_lines("x\r"), vec!["x", ""]);
        // \n\r is two breaks, not one
        assert_eq!(split_lines("a\n\rb"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_count_breaks_matches_split() {
        for text in ["", "a", "a\nb", "a\r\n\rb\n", "\r\r\n\n"] {
            assert_eq!(count_breaks(text) + 1, split_lines(text).len(), "{text:?}");
        }
    }

    #[test]
    fn test_detect() {
        assert_eq!(LineEnding::detect("plain"), LineEnding::None);
        assert_eq!(LineEnding::detect("a\nb\nc"), LineEnding::Lf);
        assert_eq!(LineEnding::detect("a\r\nb\r\n"), LineEnding::CrLf);
        assert_eq!(LineEnding::detect("a\rb"), LineEnding::Cr);
        assert_eq!(LineEnding::detect("a\r\nb\nc"), LineEnding::Mixed);
    }

    #[test]
    fn test_has_break() {
        assert!(!has_break("abc"));
        assert!(has_break("a\rb"));
        assert!(has_break("\n"));
    }
}
