//! The interactive form engine.
//!
//! A [`Form`] asks each field in order, re-prompting until the answer
//! passes validation:
//!
//! ```rust
//! use termkit_input::{FieldSpec, FieldType, Form, FormValue, MockTerminal};
//!
//! let form = Form::new()
//!     .field("name", FieldSpec::new("Name").required())
//!     .field("age", FieldSpec::new("Age").kind(FieldType::Int));
//!
//! let terminal = MockTerminal::with_responses(["", "Ada", "36"]);
//! let result = form.run_with(&terminal).unwrap();
//!
//! assert_eq!(result.get("name"), Some(&FormValue::from("Ada")));
//! assert_eq!(result.get("age"), Some(&FormValue::Int(36)));
//! assert!(terminal.transcript().contains("Name is required."));
//! ```

use serde_json::Value;
use termkit_render::{ansi_with, ColorChoice};

use crate::error::FormError;
use crate::field::FieldSpec;
use crate::terminal::{RealTerminal, TerminalIO};
use crate::validate::check;
use crate::value::{FormResult, FormValue};

/// Suffix appended to every prompt unless overridden.
pub const DEFAULT_PROMPT_SUFFIX: &str = ": ";

/// Style applied to validation messages.
pub const ERROR_STYLE: &str = "color: red";

/// Where a single field is in its prompt cycle.
#[derive(Debug, Clone, PartialEq)]
enum FieldState {
    Prompting,
    Validating(String),
    Accepted(FormValue),
}

/// An ordered set of fields to collect.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<(String, FieldSpec)>,
    prompt_prefix: String,
    prompt_suffix: String,
    color: ColorChoice,
}

impl Default for Form {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            prompt_prefix: String::new(),
            prompt_suffix: DEFAULT_PROMPT_SUFFIX.to_string(),
            color: ColorChoice::Auto,
        }
    }
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. A later field with the same key replaces the earlier
    /// one in place.
    pub fn field(mut self, key: impl Into<String>, spec: impl Into<FieldSpec>) -> Self {
        let key = key.into();
        let spec = spec.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(existing) => existing.1 = spec,
            None => self.fields.push((key, spec)),
        }
        self
    }

    /// Text written before every prompt.
    pub fn prompt_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prompt_prefix = prefix.into();
        self
    }

    /// Text written after every prompt, `": "` by default.
    pub fn prompt_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.prompt_suffix = suffix.into();
        self
    }

    /// Whether validation messages are colored.
    pub fn color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Builds a form from a JSON object mapping field keys to field configs.
    ///
    /// See [`FieldSpec::from_config`] for the accepted field shapes. Key
    /// order is preserved.
    pub fn from_config(config: &Value) -> Result<Self, FormError> {
        let Value::Object(map) = config else {
            return Err(FormError::InvalidForm(
                "expected an object mapping field keys to configs".to_string(),
            ));
        };
        map.iter().try_fold(Form::new(), |form, (key, field)| {
            Ok(form.field(key.as_str(), FieldSpec::from_config(key, field)?))
        })
    }

    /// Parses JSON text and builds a form from it.
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        let config: Value =
            serde_json::from_str(json).map_err(|e| FormError::InvalidForm(e.to_string()))?;
        Self::from_config(&config)
    }

    /// Field keys in prompt order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Prompt text for a field, without any answer.
    pub fn prompt_for(&self, spec: &FieldSpec) -> String {
        match spec.default_value() {
            Some(default) => format!(
                "{}{} (default: {}){}",
                self.prompt_prefix,
                spec.label(),
                default,
                self.prompt_suffix
            ),
            None => format!(
                "{}{}{}",
                self.prompt_prefix,
                spec.label(),
                self.prompt_suffix
            ),
        }
    }

    /// Runs the form against stdin and stdout.
    pub fn run(&self) -> Result<FormResult, FormError> {
        self.run_with(&RealTerminal)
    }

    /// Runs the form against the given terminal.
    pub fn run_with<T: TerminalIO + ?Sized>(&self, terminal: &T) -> Result<FormResult, FormError> {
        let mut result = FormResult::new();
        for (key, spec) in &self.fields {
            let value = self.ask(terminal, key, spec)?;
            result.insert(key.as_str(), value);
        }
        Ok(result)
    }

    fn ask<T: TerminalIO + ?Sized>(
        &self,
        terminal: &T,
        key: &str,
        spec: &FieldSpec,
    ) -> Result<FormValue, FormError> {
        let prompt = self.prompt_for(spec);
        let mut state = FieldState::Prompting;
        loop {
            state = match state {
                FieldState::Prompting => {
                    terminal.write_prompt(&prompt)?;
                    let line = terminal.read_line()?;
                    if line.is_empty() {
                        return Err(FormError::Cancelled {
                            field: key.to_string(),
                        });
                    }
                    let answer = line.trim();
                    let answer = match spec.default_value() {
                        Some(default) if answer.is_empty() => default,
                        _ => answer,
                    };
                    FieldState::Validating(answer.to_string())
                }
                FieldState::Validating(answer) => match check(spec, &answer) {
                    Ok(value) => FieldState::Accepted(value),
                    Err(failure) => {
                        tracing::debug!(field = key, reason = %failure, "answer rejected");
                        let message = failure.to_string();
                        terminal.write_line(&ansi_with(&message, ERROR_STYLE, self.color))?;
                        FieldState::Prompting
                    }
                },
                FieldState::Accepted(value) => return Ok(value),
            };
        }
    }
}

/// Runs `fields` against stdin and stdout with the given prompt suffix.
pub fn input_form<K, F>(
    fields: impl IntoIterator<Item = (K, F)>,
    prompt_suffix: &str,
) -> Result<FormResult, FormError>
where
    K: Into<String>,
    F: Into<FieldSpec>,
{
    fields
        .into_iter()
        .fold(Form::new(), |form, (key, spec)| form.field(key, spec))
        .prompt_suffix(prompt_suffix)
        .run()
}
