//! Style descriptor compilation.
//!
//! A style descriptor is a CSS-like declaration list such as
//! `"color: red; font-weight: bold"`. It compiles to an ordered list of SGR
//! codes ([`StyleCodes`]) which can then wrap text in a single escape
//! sequence:
//!
//! ```rust
//! use termkit_render::style::compile_style;
//!
//! let codes = compile_style("color: red; font-weight: bold");
//! assert_eq!(codes.as_slice(), &[31, 1]);
//! assert_eq!(codes.wrap("error"), "\x1b[31;1merror\x1b[0m");
//! ```
//!
//! [`ansi`] adds terminal capability detection on top: when stdout cannot
//! render escape sequences the text is returned untouched.

mod color;
mod declarations;

pub use color::NamedColor;
pub use declarations::code_for;

use crate::output::ColorChoice;

/// Escape sequence that resets all attributes.
pub const RESET: &str = "\x1b[0m";

/// Compiled SGR codes for a style descriptor, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleCodes(Vec<u8>);

impl StyleCodes {
    /// Returns true when the descriptor produced no codes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The codes in declaration order.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// The "set attributes" escape sequence, or `None` when there are no codes.
    pub fn sequence(&self) -> Option<String> {
        if self.0.is_empty() {
            return None;
        }
        let joined = self
            .0
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(";");
        Some(format!("\x1b[{}m", joined))
    }

    /// Wraps `text` in the attribute sequence and a trailing reset.
    ///
    /// Empty code lists return the text unchanged rather than emitting a
    /// no-op escape wrapper.
    pub fn wrap(&self, text: &str) -> String {
        match self.sequence() {
            Some(prefix) => format!("{}{}{}", prefix, text, RESET),
            None => text.to_string(),
        }
    }
}

impl From<Vec<u8>> for StyleCodes {
    fn from(codes: Vec<u8>) -> Self {
        StyleCodes(codes)
    }
}

/// Compiles a style descriptor into SGR codes.
///
/// Compilation does not consult terminal capabilities.
pub fn compile_style(styles: &str) -> StyleCodes {
    StyleCodes(declarations::parse_declarations(styles))
}

/// Applies a style descriptor to `text` if the terminal supports ANSI.
///
/// # Example
///
/// ```rust
/// use termkit_render::ansi;
///
/// // Unknown properties never style anything.
/// assert_eq!(ansi("plain", "margin: 0"), "plain");
/// ```
pub fn ansi(text: &str, styles: &str) -> String {
    ansi_with(text, styles, ColorChoice::Auto)
}

/// Applies a style descriptor to `text` under an explicit [`ColorChoice`].
pub fn ansi_with(text: &str, styles: &str, choice: ColorChoice) -> String {
    if !choice.should_use_color() {
        return text.to_string();
    }
    compile_style(styles).wrap(text)
}
