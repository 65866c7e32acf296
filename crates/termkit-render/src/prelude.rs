//! Rendering prelude for convenient imports.
//!
//! ```rust
//! use termkit_render::prelude::*;
//!
//! let out = Table::new().border(BorderStyle::Rounded).render(&[Row::new().cell("k", "v")], None);
//! assert!(out.starts_with('╭'));
//! ```

pub use crate::list::{render_list, ListStyle};
pub use crate::output::ColorChoice;
pub use crate::style::{ansi, ansi_with, compile_style};
pub use crate::tabular::{render_table, BorderStyle, ColumnSpec, Row, Table};
