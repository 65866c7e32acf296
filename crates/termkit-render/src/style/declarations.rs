//! Declaration-list scanning for style descriptors.
//!
//! A style descriptor is a list of `property: value` declarations separated
//! by `;`:
//!
//! ```text
//! color: red; background: white; font-weight: bold
//! ```
//!
//! Each segment is trimmed; empty segments and segments without a `:` are
//! skipped. Only the first `:` splits, so everything after it is the value.
//!
//! | Property | Value | Code |
//! |----------|-------|------|
//! | `color` | named color | 30-37 |
//! | `background`, `background-color` | named color | 40-47 |
//! | `font-weight` | `bold` | 1 |
//! | `font-style` | `italic` | 3 |
//! | `text-decoration` | `underline` | 4 |
//! | `text-decoration` | `strike-through`, `line-through` | 9 |
//!
//! Property names are matched exactly after trimming. Values are trimmed
//! and lowercased before lookup. Unknown properties and values produce no
//! code. No CSS syntax beyond `;` and `:` is recognized: quotes, brackets
//! and comments are ordinary characters.

use super::color::NamedColor;

/// Parses a descriptor into SGR codes, in declaration order.
pub fn parse_declarations(styles: &str) -> Vec<u8> {
    styles
        .split(';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .filter_map(|segment| segment.split_once(':'))
        .filter_map(|(property, value)| code_for(property.trim(), &value.trim().to_lowercase()))
        .collect()
}

/// Maps one `property: value` pair to its SGR code.
///
/// `value` is expected to be trimmed and lowercased already.
pub fn code_for(property: &str, value: &str) -> Option<u8> {
    match property {
        "color" => NamedColor::parse(value).map(NamedColor::fg_code),
        "background" | "background-color" => NamedColor::parse(value).map(NamedColor::bg_code),
        "font-weight" => (value == "bold").then_some(1),
        "font-style" => (value == "italic").then_some(3),
        "text-decoration" => match value {
            "underline" => Some(4),
            "strike-through" | "line-through" => Some(9),
            _ => None,
        },
        _ => None,
    }
}
