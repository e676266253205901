//! Display width calculation for terminal cells.

use crate::error::Error;
use std::str::FromStr;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Default number of columns a tab occupies.
pub const DEFAULT_TAB_WIDTH: u8 = 8;

/// Width calculation method for ambiguous-width characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WidthMethod {
    /// POSIX-like wcwidth: ambiguous width = 1.
    #[default]
    WcWidth,
    /// Unicode East Asian Width: ambiguous width = 2.
    Unicode,
}

impl WidthMethod {
    /// Host-facing name of the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WcWidth => "wcwidth",
            Self::Unicode => "unicode",
        }
    }
}

impl FromStr for WidthMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wcwidth" => Ok(Self::WcWidth),
            "unicode" => Ok(Self::Unicode),
            _ => Err(Error::InvalidWidthMethod(s.to_string())),
        }
    }
}

/// How a tab character is measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TabPolicy {
    /// Every tab is exactly `tab_width` columns.
    #[default]
    Flat,
    /// A tab advances to the next multiple of `tab_width`.
    Stops,
}

/// Width configuration for one buffer.
///
/// ```
/// use opentui_edit::unicode::{TabPolicy, WidthConfig};
///
/// let config = WidthConfig::default()
///     .with_tab_width(4)
///     .with_tab_policy(TabPolicy::Stops);
/// assert_eq!(config.tab_columns(1), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WidthConfig {
    pub method: WidthMethod,
    pub tab_width: u8,
    pub tab_policy: TabPolicy,
}

impl Default for WidthConfig {
    fn default() -> Self {
        Self {
            method: WidthMethod::WcWidth,
            tab_width: DEFAULT_TAB_WIDTH,
            tab_policy: TabPolicy::Flat,
        }
    }
}

impl WidthConfig {
    /// Default configuration with the given width method.
    #[must_use]
    pub fn new(method: WidthMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_method(mut self, method: WidthMethod) -> Self {
        self.method = method;
        self
    }

    /// Set the tab width. Zero is treated as one column.
    #[must_use]
    pub fn with_tab_width(mut self, width: u8) -> Self {
        self.tab_width = width.max(1);
        self
    }

    #[must_use]
    pub fn with_tab_policy(mut self, policy: TabPolicy) -> Self {
        self.tab_policy = policy;
        self
    }

    /// Columns taken by a tab that starts at `column`.
    #[must_use]
    pub fn tab_columns(&self, column: usize) -> usize {
        let tab_width = usize::from(self.tab_width.max(1));
        match self.tab_policy {
            TabPolicy::Flat => tab_width,
            TabPolicy::Stops => tab_width - (column % tab_width),
        }
    }

    /// Display width of one grapheme cluster starting at `column`.
    ///
    /// `column` only matters for tabs under [`TabPolicy::Stops`].
    #[must_use]
    pub fn grapheme_width(&self, grapheme: &str, column: usize) -> usize {
        let mut chars = grapheme.chars();
        match (chars.next(), chars.next()) {
            (None, _) => 0,
            (Some('\t'), None) => self.tab_columns(column),
            (Some(c), None) => display_width_char_with_method(c, self.method),
            _ if grapheme.chars().all(char::is_control) => 0,
            _ => display_width_with_method(grapheme, self.method),
        }
    }
}

/// Get the display width of a string in terminal columns using a specific method.
#[must_use]
pub fn display_width_with_method(s: &str, method: WidthMethod) -> usize {
    match method {
        WidthMethod::WcWidth => UnicodeWidthStr::width(s),
        WidthMethod::Unicode => UnicodeWidthStr::width_cjk(s),
    }
}

/// Get the display width of a character in terminal columns using a specific method.
///
/// Control characters have no width.
#[inline]
#[must_use]
pub fn display_width_char_with_method(c: char, method: WidthMethod) -> usize {
    // Fast path: printable ASCII is always one column
    if (' '..='~').contains(&c) {
        return 1;
    }
    if c.is_control() {
        return 0;
    }
    match method {
        WidthMethod::WcWidth => UnicodeWidthChar::width(c).unwrap_or(0),
        WidthMethod::Unicode => UnicodeWidthChar::width_cjk(c).unwrap_or(0),
    }
}
