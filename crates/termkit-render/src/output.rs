//! Color choice for rendering.
//!
//! [`ColorChoice`] decides whether styled output carries ANSI escape codes.

use std::str::FromStr;

use crate::terminal::supports_ansi;

/// Controls whether ANSI escape codes are emitted.
///
/// - `Auto` - Use the process-wide terminal capability detection (default)
/// - `Always` - Always emit escape codes
/// - `Never` - Never emit escape codes (plain text)
///
/// # Example
///
/// ```rust
/// use termkit_render::{ansi_with, ColorChoice};
///
/// assert_eq!(ansi_with("ok", "color: green", ColorChoice::Never), "ok");
/// assert_eq!(
///     ansi_with("ok", "color: green", ColorChoice::Always),
///     "\x1b[32mok\x1b[0m"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Detect terminal capabilities
    #[default]
    Auto,
    /// Always use ANSI escape codes
    Always,
    /// Never use ANSI escape codes
    Never,
}

impl ColorChoice {
    /// Resolves the choice to a concrete decision about whether to use color.
    pub fn should_use_color(&self) -> bool {
        match self {
            ColorChoice::Auto => supports_ansi(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

impl FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" | "on" => Ok(ColorChoice::Always),
            "never" | "off" => Ok(ColorChoice::Never),
            other => Err(format!(
                "invalid color choice '{}' (expected auto, always or never)",
                other
            )),
        }
    }
}
