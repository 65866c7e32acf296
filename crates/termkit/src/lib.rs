//! # termkit
//!
//! Presentation helpers for command-line programs:
//!
//! - [`ansi`]: apply a CSS-like style string (`"color: red; font-weight: bold"`)
//!   when the terminal supports ANSI escape sequences
//! - [`table`]: draw records as a bordered table sized to its content
//! - [`list_items`]: print bulleted or numbered lists
//! - [`input_form`]: ask a sequence of validated questions
//!
//! Each of these writes to the real terminal. [`Console`] bundles them over
//! any writer and any [`TerminalIO`], which is how they are tested.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use termkit::{ColorChoice, Console, FieldSpec, FieldType, Form, ListStyle, MockTerminal};
//!
//! let answers = MockTerminal::with_responses(["Ada", "36"]);
//! let mut console = Console::new(Vec::new(), answers).color(ColorChoice::Never);
//!
//! console.table(&[json!({"id": 1, "name": "Alice"})], None)?;
//! console.list_items(["tea", "toast"], &ListStyle::ordered())?;
//!
//! let form = Form::new()
//!     .field("name", FieldSpec::new("Name").required())
//!     .field("age", FieldSpec::new("Age").kind(FieldType::Int));
//! let result = console.input_form(&form)?;
//! assert_eq!(result.to_json(), json!({"name": "Ada", "age": 36}));
//!
//! let out = String::from_utf8(console.into_writer()).unwrap();
//! assert!(out.contains("| 1  | Alice |"));
//! assert!(out.contains("2. toast"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Styling
//!
//! ```rust
//! use termkit::{ansi_with, ColorChoice};
//!
//! assert_eq!(
//!     ansi_with("done", "color: green; text-decoration: underline", ColorChoice::Always),
//!     "\x1b[32;4mdone\x1b[0m"
//! );
//! // Unknown properties and values are ignored.
//! assert_eq!(ansi_with("done", "color: teal", ColorChoice::Always), "done");
//! ```
//!
//! Whether [`ansi`] emits escape sequences is decided once per process:
//! `NO_COLOR` turns it off, Windows needs a known ANSI-capable terminal,
//! elsewhere stdout must be a TTY with a `TERM` other than `dumb`.

mod console;

pub use console::Console;

pub use termkit_render::list;
pub use termkit_render::style;
pub use termkit_render::tabular;
pub use termkit_render::terminal;

pub use termkit_render::{
    ansi, ansi_with, compile_style, list_items, render_list, render_table, supports_ansi,
    table, write_list, BorderStyle, ColorChoice, ColumnSpec, ListStyle, Row, StyleCodes, Table,
};

pub use termkit_input::{
    check, input_form, Callback, FieldSpec, FieldType, Form, FormError, FormResult, FormValue,
    MockTerminal, RealTerminal, TerminalIO, ValidationFailure, Validators,
};

#[cfg(feature = "mail")]
pub use termkit_mail as mail;
