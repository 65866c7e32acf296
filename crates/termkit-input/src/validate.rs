//! Answer validation and coercion.

use std::fmt;

use crate::field::{FieldSpec, FieldType};
use crate::value::FormValue;

/// Why an answer was rejected.
///
/// Displays as the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    Required { label: String },
    TooLong { label: String, max: usize },
    NotInteger { label: String },
    NotNumber { label: String },
    Callback { label: String, message: Option<String> },
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationFailure::Required { label } => write!(f, "{} is required.", label),
            ValidationFailure::TooLong { label, max } => {
                write!(f, "{} must be at most {} characters.", label, max)
            }
            ValidationFailure::NotInteger { label } => write!(f, "{} must be an integer.", label),
            ValidationFailure::NotNumber { label } => write!(f, "{} must be a number.", label),
            ValidationFailure::Callback {
                message: Some(message),
                ..
            } => f.write_str(message),
            ValidationFailure::Callback { label, .. } => write!(f, "{} failed validation.", label),
        }
    }
}

/// Checks `input` against the field's validators and coerces it.
///
/// `input` must already be trimmed and have any default substituted.
/// Checks run in order (required, length, type, callback) and the first
/// failure wins. Type checks and coercion only apply to non-empty input.
///
/// ```rust
/// use termkit_input::{check, FieldSpec, FieldType, FormValue};
///
/// let age = FieldSpec::new("Age").kind(FieldType::Int);
/// assert_eq!(check(&age, "12"), Ok(FormValue::Int(12)));
/// assert_eq!(check(&age, "12a").unwrap_err().to_string(), "Age must be an integer.");
/// ```
pub fn check(spec: &FieldSpec, input: &str) -> Result<FormValue, ValidationFailure> {
    let label = spec.label();
    let validators = spec.validators();

    if validators.required && input.is_empty() {
        return Err(ValidationFailure::Required {
            label: label.to_string(),
        });
    }

    if let Some(max) = validators.max_length {
        if input.len() > max {
            return Err(ValidationFailure::TooLong {
                label: label.to_string(),
                max,
            });
        }
    }

    let value = if input.is_empty() {
        FormValue::Text(String::new())
    } else {
        coerce(validators.kind, label, input)?
    };

    if let Some(callback) = &validators.callback {
        if !callback.check(input) {
            return Err(ValidationFailure::Callback {
                label: label.to_string(),
                message: callback.failure_message().map(str::to_string),
            });
        }
    }

    Ok(value)
}

fn coerce(kind: FieldType, label: &str, input: &str) -> Result<FormValue, ValidationFailure> {
    match kind {
        FieldType::None | FieldType::String => Ok(FormValue::Text(input.to_string())),
        FieldType::Int => {
            if !input.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ValidationFailure::NotInteger {
                    label: label.to_string(),
                });
            }
            input
                .parse::<i64>()
                .map(FormValue::Int)
                .map_err(|_| ValidationFailure::NotInteger {
                    label: label.to_string(),
                })
        }
        FieldType::Float => match input.parse::<f64>() {
            Ok(x) if x.is_finite() && is_numeric_literal(input) => Ok(FormValue::Float(x)),
            _ => Err(ValidationFailure::NotNumber {
                label: label.to_string(),
            }),
        },
    }
}

/// Rejects spellings `f64::from_str` accepts that are not numbers as typed,
/// such as `inf` or `NaN`.
fn is_numeric_literal(input: &str) -> bool {
    input
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Callback;

    #[test]
    fn test_required_rejects_empty() {
        let spec = FieldSpec::new("Name").required();
        assert_eq!(check(&spec, "").unwrap_err().to_string(), "Name is required.");
        assert_eq!(check(&spec, "Ada"), Ok(FormValue::from("Ada")));
    }

    #[test]
    fn test_optional_empty_is_empty_text() {
        let spec = FieldSpec::new("Nick").kind(FieldType::Int);
        assert_eq!(check(&spec, ""), Ok(FormValue::from("")));
    }

    #[test]
    fn test_max_length_counts_bytes() {
        let spec = FieldSpec::new("Code").max_length(4);
        assert!(check(&spec, "abcd").is_ok());
        assert!(check(&spec, "Zoë").is_ok());
        assert_eq!(
            check(&spec, "Zoë!").unwrap_err().to_string(),
            "Code must be at most 4 characters."
        );
        assert_eq!(
            check(&spec, "abcde").unwrap_err().to_string(),
            "Code must be at most 4 characters."
        );
    }

    #[test]
    fn test_int() {
        let spec = FieldSpec::new("Age").kind(FieldType::Int);
        assert_eq!(check(&spec, "007"), Ok(FormValue::Int(7)));
        for bad in ["12a", "-3", "1.5", "+4", "99999999999999999999"] {
            assert_eq!(
                check(&spec, bad),
                Err(ValidationFailure::NotInteger {
                    label: "Age".into()
                }),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_float() {
        let spec = FieldSpec::new("Price").kind(FieldType::Float);
        assert_eq!(check(&spec, "2.5"), Ok(FormValue::Float(2.5)));
        assert_eq!(check(&spec, "-1e3"), Ok(FormValue::Float(-1000.0)));
        assert_eq!(check(&spec, "3"), Ok(FormValue::Float(3.0)));
        for bad in ["abc", "inf", "NaN", "1e999", "1,5"] {
            assert_eq!(
                check(&spec, bad).unwrap_err().to_string(),
                "Price must be a number.",
                "{bad}"
            );
        }
    }

    #[test]
    fn test_first_failure_wins() {
        let spec = FieldSpec::new("Age")
            .max_length(2)
            .kind(FieldType::Int);
        assert_eq!(
            check(&spec, "abc").unwrap_err().to_string(),
            "Age must be at most 2 characters."
        );
    }

    #[test]
    fn test_callback_messages() {
        let plain = FieldSpec::new("Code").validate(|s| s.starts_with('X'));
        assert_eq!(
            check(&plain, "Y1").unwrap_err().to_string(),
            "Code failed validation."
        );

        let custom = FieldSpec::new("Code")
            .callback(Callback::new(|s| s.starts_with('X')).message("Codes start with X."));
        assert_eq!(
            check(&custom, "Y1").unwrap_err().to_string(),
            "Codes start with X."
        );
        assert_eq!(check(&custom, "X1"), Ok(FormValue::from("X1")));
    }

    #[test]
    fn test_callback_sees_raw_text_after_type_check() {
        let spec = FieldSpec::new("Qty")
            .kind(FieldType::Int)
            .validate(|s| s != "0");
        assert_eq!(check(&spec, "5"), Ok(FormValue::Int(5)));
        assert!(matches!(
            check(&spec, "0"),
            Err(ValidationFailure::Callback { .. })
        ));
    }
}
