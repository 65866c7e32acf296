//! # Termkit Render - Styled Terminal Output
//!
//! `termkit-render` turns data into terminal text: CSS-like style strings
//! become ANSI escape sequences, records become bordered tables and values
//! become bullet or numbered lists.
//!
//! ## Core Concepts
//!
//! - [`ansi`]: Apply a style descriptor such as `"color: red; font-weight: bold"`
//! - [`supports_ansi`]: Process-wide, memoized terminal capability detection
//! - [`ColorChoice`]: Force or suppress escape codes regardless of detection
//! - [`Table`]: Multibyte-aware table layout from any `Serialize` records
//! - [`ListStyle`]: Ordered and unordered list rendering
//!
//! ## Quick Start
//!
//! ```rust
//! use termkit_render::{render_list, render_table, ListStyle};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct User {
//!     id: u32,
//!     name: String,
//! }
//!
//! let users = vec![User { id: 1, name: "Alice".into() }];
//! let table = render_table(&users, None);
//! assert_eq!(
//!     table,
//!     "+----+-------+\n\
//!      | id | name  |\n\
//!      +----+-------+\n\
//!      | 1  | Alice |\n\
//!      +----+-------+"
//! );
//!
//! let lines = render_list(&["first", "second"], &ListStyle::ordered());
//! assert_eq!(lines, vec!["1. first", "2. second"]);
//! ```
//!
//! ## Styling
//!
//! Style descriptors accept `color`, `background`/`background-color`,
//! `font-weight: bold`, `font-style: italic` and
//! `text-decoration: underline | line-through | strike-through`. Unknown
//! declarations are ignored.
//!
//! ```rust
//! use termkit_render::{ansi_with, ColorChoice};
//!
//! let styled = ansi_with("failed", "color: red; font-weight: bold", ColorChoice::Always);
//! assert_eq!(styled, "\x1b[31;1mfailed\x1b[0m");
//! ```

pub mod list;
pub mod output;
pub mod prelude;
pub mod style;
pub mod tabular;
pub mod terminal;

pub use list::{list_items, render_list, write_list, ListStyle};
pub use output::ColorChoice;
pub use style::{ansi, ansi_with, compile_style, StyleCodes, RESET};
pub use tabular::{
    display_width, pad_right, render_table, table, BorderStyle, ColumnSpec, Row, Table,
};
pub use terminal::{supports_ansi, EnvReader, MockEnv, RealEnv};
