//! Error types for form collection.

use std::io;

/// Errors that stop a form.
///
/// Validation failures are not errors: they are shown to the user and the
/// field is asked again. Only configuration mistakes and a broken input
/// stream end a form early.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// A field's configuration cannot be used.
    #[error("Invalid configuration for field '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    /// The form configuration as a whole is malformed.
    #[error("Invalid form configuration: {0}")]
    InvalidForm(String),

    /// Input ended (Ctrl+D or closed stdin) before the field was answered.
    #[error("Input ended before field '{field}' was answered.")]
    Cancelled { field: String },

    /// Reading from or writing to the terminal failed.
    #[error("Prompt failed: {0}")]
    Io(#[from] io::Error),
}

impl FormError {
    /// Create an invalid field error.
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_field_message() {
        let err = FormError::invalid_field("age", "unknown type 'bool'");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for field 'age': unknown type 'bool'"
        );
    }

    #[test]
    fn io_errors_convert() {
        let err: FormError = io::Error::new(io::ErrorKind::BrokenPipe, "gone").into();
        assert!(matches!(err, FormError::Io(_)));
        assert_eq!(err.to_string(), "Prompt failed: gone");
    }
}
