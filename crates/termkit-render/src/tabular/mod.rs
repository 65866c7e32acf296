//! Unicode-aware table rendering.
//!
//! Tables are laid out from the rendered display width of their content, so
//! accented letters, CJK glyphs and pre-styled (ANSI) cells all line up:
//!
//! ```rust
//! use termkit_render::tabular::{render_table, display_width};
//! use serde_json::json;
//!
//! let rows = vec![
//!     json!({"name": "José", "city": "São Paulo"}),
//!     json!({"name": "美咲", "city": "東京"}),
//! ];
//! let out = render_table(&rows, None);
//! let widths: Vec<usize> = out.lines().map(display_width).collect();
//! assert!(widths.iter().all(|&w| w == widths[0]));
//! ```
//!
//! Rows are any `Serialize` records (see [`Row`]). Columns come from an
//! explicit [`ColumnSpec`] or, when none is given, from the first row's keys.

mod decorator;
mod types;
mod util;

pub use decorator::{render_table, table, BorderStyle, Table, EMPTY_TABLE};
pub use types::{normalize_rows, ColumnSpec, Row};
pub use util::{display_width, pad_right};
