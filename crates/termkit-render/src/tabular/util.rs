//! Display-width measurement and padding.
//!
//! Both functions measure text the way a terminal draws it: East Asian wide
//! characters take two cells, combining marks take none, and ANSI escape
//! sequences are invisible.

use console::{measure_text_width, pad_str, Alignment};

/// Returns the number of terminal cells `s` occupies.
///
/// # Example
///
/// ```rust
/// use termkit_render::tabular::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Pads a string on the right to reach the target display width.
///
/// Strings already at or past the width are returned unchanged.
///
/// ```rust
/// use termkit_render::tabular::pad_right;
///
/// assert_eq!(pad_right("42", 5), "42   ");
/// assert_eq!(pad_right("日本", 5), "日本 ");
/// assert_eq!(pad_right("hello", 3), "hello");
/// ```
pub fn pad_right(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Left, None).into_owned()
}
