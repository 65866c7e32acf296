//! Interactive forms for terminal applications.
//!
//! `termkit-input` asks the user a sequence of questions, validates each
//! answer and re-prompts until it is acceptable. Fields are declared with
//! [`FieldSpec`] (in code or from JSON configuration) and collected by a
//! [`Form`] into an ordered [`FormResult`].
//!
//! # Quick Start
//!
//! ```no_run
//! use termkit_input::{input_form, FieldSpec, FieldType};
//!
//! let answers = input_form(
//!     [
//!         ("name", FieldSpec::new("Name").required()),
//!         ("age", FieldSpec::new("Age").kind(FieldType::Int)),
//!     ],
//!     ": ",
//! )?;
//! println!("{}", answers.to_json());
//! # Ok::<(), termkit_input::FormError>(())
//! ```
//!
//! # Validation
//!
//! Each answer is trimmed, replaced by the field's default when empty, and
//! then checked in order: required, maximum length, type, callback. The
//! first failing check's message is printed in red and the field is asked
//! again. See [`check`].
//!
//! # Testing
//!
//! Forms run against any [`TerminalIO`]. [`MockTerminal`] replays scripted
//! answers and records the transcript:
//!
//! ```
//! use termkit_input::{Form, MockTerminal};
//!
//! let form = Form::new().field("name", "Name");
//! let terminal = MockTerminal::with_responses(["Ada"]);
//! let answers = form.run_with(&terminal).unwrap();
//! assert_eq!(answers.to_json()["name"], "Ada");
//! ```

mod error;
mod field;
mod form;
mod terminal;
mod validate;
mod value;

pub use error::FormError;
pub use field::{Callback, FieldSpec, FieldType, Validators};
pub use form::{input_form, Form, DEFAULT_PROMPT_SUFFIX, ERROR_STYLE};
pub use terminal::{read_line_lossy, MockTerminal, RealTerminal, TerminalIO};
pub use validate::{check, ValidationFailure};
pub use value::{FormResult, FormValue};
