//! Bordered table layout.
//!
//! [`Table`] sizes each column to the widest of its header and cells
//! (measured in display width) and draws the classic grid:
//!
//! ```text
//! +----+-------+
//! | id | name  |
//! +----+-------+
//! | 1  | Alice |
//! +----+-------+
//! ```
//!
//! # Example
//!
//! ```rust
//! use termkit_render::tabular::{BorderStyle, Table};
//! use serde_json::json;
//!
//! let rows = vec![json!({"id": 1, "name": "Alice"})];
//! let out = Table::new().render(&rows, None);
//! assert_eq!(out.lines().count(), 5);
//!
//! let light = Table::new().border(BorderStyle::Light).render(&rows, None);
//! assert!(light.starts_with('┌'));
//! ```

use std::io::{self, Write};

use serde::Serialize;

use super::types::{normalize_rows, ColumnSpec, Row};
use super::util::{display_width, pad_right};
use crate::output::ColorChoice;
use crate::style::ansi_with;

/// Text printed instead of a table when there are no rows.
pub const EMPTY_TABLE: &str = "(empty)";

/// Border style for table decoration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BorderStyle {
    /// ASCII borders: +, -, |
    #[default]
    Ascii,
    /// Light Unicode box-drawing characters: ┌, ─, ┐, │, └, ┘, ├, ┼, ┤, ┬, ┴
    Light,
    /// Heavy Unicode box-drawing characters: ┏, ━, ┓, ┃, ┗, ┛, ┣, ╋, ┫, ┳, ┻
    Heavy,
    /// Double-line Unicode box-drawing: ╔, ═, ╗, ║, ╚, ╝, ╠, ╬, ╣, ╦, ╩
    Double,
    /// Rounded corners with light lines: ╭, ─, ╮, │, ╰, ╯, ├, ┼, ┤, ┬, ┴
    Rounded,
}

impl BorderStyle {
    fn chars(&self) -> BorderChars {
        match self {
            BorderStyle::Ascii => BorderChars {
                horizontal: '-',
                vertical: '|',
                top: ['+', '+', '+'],
                middle: ['+', '+', '+'],
                bottom: ['+', '+', '+'],
            },
            BorderStyle::Light => BorderChars {
                horizontal: '─',
                vertical: '│',
                top: ['┌', '┬', '┐'],
                middle: ['├', '┼', '┤'],
                bottom: ['└', '┴', '┘'],
            },
            BorderStyle::Heavy => BorderChars {
                horizontal: '━',
                vertical: '┃',
                top: ['┏', '┳', '┓'],
                middle: ['┣', '╋', '┫'],
                bottom: ['┗', '┻', '┛'],
            },
            BorderStyle::Double => BorderChars {
                horizontal: '═',
                vertical: '║',
                top: ['╔', '╦', '╗'],
                middle: ['╠', '╬', '╣'],
                bottom: ['╚', '╩', '╝'],
            },
            BorderStyle::Rounded => BorderChars {
                horizontal: '─',
                vertical: '│',
                top: ['╭', '┬', '╮'],
                middle: ['├', '┼', '┤'],
                bottom: ['╰', '┴', '╯'],
            },
        }
    }
}

/// Box-drawing characters for a border style.
///
/// Each horizontal line is `[left, joint, right]`.
#[derive(Clone, Copy, Debug)]
struct BorderChars {
    horizontal: char,
    vertical: char,
    top: [char; 3],
    middle: [char; 3],
    bottom: [char; 3],
}

#[derive(Clone, Copy)]
enum LineType {
    Top,
    Middle,
    Bottom,
}

/// Table renderer configuration.
#[derive(Clone, Debug, Default)]
pub struct Table {
    border: BorderStyle,
    header_style: Option<String>,
    color: ColorChoice,
}

impl Table {
    /// A table with ASCII borders and plain headers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the border style.
    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Style header cells with a style descriptor, e.g. `"font-weight: bold"`.
    pub fn header_style(mut self, styles: impl Into<String>) -> Self {
        self.header_style = Some(styles.into());
        self
    }

    /// Control whether header styling emits escape codes.
    pub fn color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Render records as a table.
    ///
    /// Records that do not normalize into a [`Row`] are dropped.
    pub fn render<T: Serialize>(&self, records: &[T], columns: Option<&ColumnSpec>) -> String {
        self.render_rows(&normalize_rows(records), columns)
    }

    /// Render already-normalized rows.
    pub fn render_rows(&self, rows: &[Row], columns: Option<&ColumnSpec>) -> String {
        self.lines(rows, columns).join("\n")
    }

    /// Write the rendered table, one line at a time, to `out`.
    pub fn write_to<W: Write, T: Serialize>(
        &self,
        out: &mut W,
        records: &[T],
        columns: Option<&ColumnSpec>,
    ) -> io::Result<()> {
        for line in self.lines(&normalize_rows(records), columns) {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    fn lines(&self, rows: &[Row], columns: Option<&ColumnSpec>) -> Vec<String> {
        let Some(first) = rows.first() else {
            return vec![EMPTY_TABLE.to_string()];
        };

        let columns = match columns {
            Some(spec) => spec.clone(),
            None => ColumnSpec::from_row(first),
        };
        let widths = column_widths(rows, &columns);

        let headers: Vec<String> = columns
            .labels()
            .zip(&widths)
            .map(|(label, &width)| {
                let padded = pad_right(label, width);
                match &self.header_style {
                    Some(styles) => ansi_with(&padded, styles, self.color),
                    None => padded,
                }
            })
            .collect();

        let mut lines = Vec::with_capacity(rows.len() + 4);
        lines.push(self.horizontal_line(&widths, LineType::Top));
        lines.push(self.content_line(&headers));
        lines.push(self.horizontal_line(&widths, LineType::Middle));
        for row in rows {
            let cells: Vec<String> = columns
                .keys()
                .zip(&widths)
                .map(|(key, &width)| pad_right(row.get(key).unwrap_or(""), width))
                .collect();
            lines.push(self.content_line(&cells));
        }
        lines.push(self.horizontal_line(&widths, LineType::Bottom));
        lines
    }

    /// `| a | b |` with cells already padded to width.
    fn content_line(&self, cells: &[String]) -> String {
        let vertical = self.border.chars().vertical;
        let mut line = String::new();
        line.push(vertical);
        for cell in cells {
            line.push(' ');
            line.push_str(cell);
            line.push(' ');
            line.push(vertical);
        }
        line
    }

    fn horizontal_line(&self, widths: &[usize], line_type: LineType) -> String {
        let chars = self.border.chars();
        let [left, joint, right] = match line_type {
            LineType::Top => chars.top,
            LineType::Middle => chars.middle,
            LineType::Bottom => chars.bottom,
        };

        let segments: Vec<String> = widths
            .iter()
            .map(|&w| std::iter::repeat_n(chars.horizontal, w + 2).collect())
            .collect();

        format!(
            "{}{}{}",
            left,
            segments.join(&joint.to_string()),
            right
        )
    }
}

/// Width of each column: the widest of its header and its cells.
fn column_widths(rows: &[Row], columns: &ColumnSpec) -> Vec<usize> {
    columns
        .iter()
        .map(|(key, label)| {
            rows.iter()
                .map(|row| display_width(row.get(key).unwrap_or("")))
                .fold(display_width(label), usize::max)
        })
        .collect()
}

/// Render records as an ASCII table.
pub fn render_table<T: Serialize>(records: &[T], columns: Option<&ColumnSpec>) -> String {
    Table::new().render(records, columns)
}

/// Print records as an ASCII table to stdout.
pub fn table<T: Serialize>(records: &[T], columns: Option<&ColumnSpec>) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    Table::new().write_to(&mut out, records, columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_table() {
        let rows: Vec<serde_json::Value> = vec![];
        assert_eq!(render_table(&rows, None), "(empty)");
    }

    #[test]
    fn test_only_malformed_rows_is_empty() {
        let rows = vec![json!(1), json!("two"), json!(null)];
        assert_eq!(render_table(&rows, None), "(empty)");
    }

    #[test]
    fn test_single_row_layout() {
        let rows = vec![json!({"id": 1, "name": "Alice"})];
        let out = render_table(&rows, None);
        let expected = [
            "+----+-------+",
            "| id | name  |",
            "+----+-------+",
            "| 1  | Alice |",
            "+----+-------+",
        ]
        .join("\n");
        assert_eq!(out, expected);
    }

    #[test]
    fn test_header_wider_than_cells() {
        let rows = vec![json!({"identifier": "x"})];
        let out = render_table(&rows, None);
        assert!(out.contains("| identifier |"));
        assert!(out.contains("| x          |"));
    }

    #[test]
    fn test_explicit_columns_select_and_label() {
        let rows = vec![
            json!({"id": 1, "name": "Alice", "secret": "s"}),
            json!({"id": 22, "name": "Bo"}),
        ];
        let columns = ColumnSpec::new().column("name", "Name").column("id", "#");
        let out = render_table(&rows, Some(&columns));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "| Name  | #  |");
        assert_eq!(lines[3], "| Alice | 1  |");
        assert_eq!(lines[4], "| Bo    | 22 |");
        assert!(!out.contains("secret"));
    }

    #[test]
    fn test_missing_keys_render_empty() {
        let rows = vec![json!({"a": "1", "b": "2"}), json!({"a": "3"})];
        let out = render_table(&rows, None);
        assert!(out.lines().any(|l| l == "| 3 |   |"));
    }

    #[test]
    fn test_wide_characters_align() {
        let rows = vec![json!({"city": "東京"}), json!({"city": "Paris"})];
        let out = render_table(&rows, None);
        for line in out.lines() {
            assert_eq!(display_width(line), display_width("+-------+"));
        }
        assert!(out.contains("| 東京  |"));
    }

    #[test]
    fn test_light_border_has_joints() {
        let rows = vec![json!({"a": "1", "b": "2"})];
        let out = Table::new().border(BorderStyle::Light).render(&rows, None);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "┌───┬───┐");
        assert_eq!(lines[1], "│ a │ b │");
        assert_eq!(lines[2], "├───┼───┤");
        assert_eq!(lines[4], "└───┴───┘");
    }

    #[test]
    fn test_header_style_wraps_padded_cells() {
        let rows = vec![json!({"name": "Alice"})];
        let out = Table::new()
            .header_style("font-weight: bold")
            .color(ColorChoice::Always)
            .render(&rows, None);
        let header = out.lines().nth(1).unwrap();
        assert_eq!(header, "| \x1b[1mname \x1b[0m |");
        assert_eq!(display_width(header), display_width("| Alice |"));
    }

    #[test]
    fn test_header_style_without_color_is_plain() {
        let rows = vec![json!({"name": "Alice"})];
        let out = Table::new()
            .header_style("font-weight: bold")
            .color(ColorChoice::Never)
            .render(&rows, None);
        assert_eq!(out, render_table(&rows, None));
    }

    #[test]
    fn test_write_to_emits_lines() {
        let rows = vec![json!({"k": "v"})];
        let mut buf = Vec::new();
        Table::new().write_to(&mut buf, &rows, None).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, format!("{}\n", render_table(&rows, None)));
    }
}
