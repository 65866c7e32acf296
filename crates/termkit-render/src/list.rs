//! Ordered and unordered lists.
//!
//! ```rust
//! use termkit_render::list::{render_list, ListStyle};
//!
//! let items = ["apples", "pears"];
//! assert_eq!(render_list(&items, &ListStyle::unordered()), vec!["- apples", "- pears"]);
//! assert_eq!(render_list(&items, &ListStyle::ordered()), vec!["1. apples", "2. pears"]);
//! assert_eq!(
//!     render_list(&items, &ListStyle::ordered().format("(%d)")),
//!     vec!["(1) apples", "(2) pears"]
//! );
//! ```

use std::fmt::Display;
use std::io::{self, Write};

/// How list items are prefixed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListStyle {
    ordered: bool,
    bullet: String,
    format: String,
}

impl Default for ListStyle {
    fn default() -> Self {
        Self {
            ordered: false,
            bullet: "-".to_string(),
            format: "%d.".to_string(),
        }
    }
}

impl ListStyle {
    /// Unordered list with the default `-` bullet.
    pub fn unordered() -> Self {
        Self::default()
    }

    /// Ordered list with the default `%d.` format.
    pub fn ordered() -> Self {
        Self {
            ordered: true,
            ..Self::default()
        }
    }

    /// Switch between ordered and unordered.
    pub fn set_ordered(mut self, ordered: bool) -> Self {
        self.ordered = ordered;
        self
    }

    /// Bullet used by unordered lists.
    pub fn bullet(mut self, bullet: impl Into<String>) -> Self {
        self.bullet = bullet.into();
        self
    }

    /// Index format used by ordered lists.
    ///
    /// A printf-style template: `%d` is the index, optionally with flags and
    /// a width (`%02d`, `%3d`, `%-3d`, `%+d`), and `%%` is a literal `%`.
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// The prefix for the item at 1-based `index`.
    pub fn prefix(&self, index: usize) -> String {
        if self.ordered {
            format_index(&self.format, index)
        } else {
            self.bullet.clone()
        }
    }
}

/// Expands every `%[flags][width]d` in `format` to `index` and `%%` to `%`.
///
/// Flags are `-` (left-justify), `0` (zero-pad) and `+` (always show the
/// sign). Anything else after a `%` is copied verbatim.
fn format_index(format: &str, index: usize) -> String {
    let mut out = String::with_capacity(format.len());
    let mut chars = format.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        if chars.peek() == Some(&'%') {
            chars.next();
            out.push('%');
            continue;
        }

        let mut spec = String::from("%");
        let (mut left, mut zero, mut plus) = (false, false, false);
        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => left = true,
                '0' => zero = true,
                '+' => plus = true,
                _ => break,
            }
            spec.push(flag);
            chars.next();
        }

        let mut width = 0usize;
        while let Some(&d) = chars.peek() {
            let Some(digit) = d.to_digit(10) else { break };
            width = width.saturating_mul(10).saturating_add(digit as usize);
            spec.push(d);
            chars.next();
        }

        if chars.peek() != Some(&'d') {
            out.push_str(&spec);
            continue;
        }
        chars.next();

        let sign = if plus { "+" } else { "" };
        let padded = if left {
            format!("{:<width$}", format!("{}{}", sign, index), width = width)
        } else if zero {
            let digits = width.saturating_sub(sign.len());
            format!("{}{:0>digits$}", sign, index, digits = digits)
        } else {
            format!("{:>width$}", format!("{}{}", sign, index), width = width)
        };
        out.push_str(&padded);
    }
    out
}

/// Render each item as one line.
pub fn render_list<T: Display>(items: &[T], style: &ListStyle) -> Vec<String> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{} {}", style.prefix(i + 1), item))
        .collect()
}

/// Write items one line at a time to `out`.
pub fn write_list<W: Write, T: Display>(
    out: &mut W,
    items: impl IntoIterator<Item = T>,
    style: &ListStyle,
) -> io::Result<()> {
    for (i, item) in items.into_iter().enumerate() {
        writeln!(out, "{} {}", style.prefix(i + 1), item)?;
    }
    Ok(())
}

/// Print items to stdout.
pub fn list_items<T: Display>(
    items: impl IntoIterator<Item = T>,
    style: &ListStyle,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_list(&mut out, items, style)
}
