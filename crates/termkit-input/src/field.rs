//! Field specifications.
//!
//! A [`FieldSpec`] describes one prompt: its label, an optional default and
//! the [`Validators`] applied to each answer. Specs are built three ways:
//!
//! ```rust
//! use serde_json::json;
//! use termkit_input::{FieldSpec, FieldType};
//!
//! // A bare label: no default, nothing required.
//! let name = FieldSpec::from("Name");
//!
//! // The builder.
//! let age = FieldSpec::new("Age").required().kind(FieldType::Int);
//!
//! // Data, as loaded from a config file.
//! let city = FieldSpec::from_config("city", &json!({
//!     "default": "Lisbon",
//!     "validators": {"length": 40}
//! })).unwrap();
//! assert_eq!(city.label(), "city");
//! assert_eq!(city.default_value(), Some("Lisbon"));
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::FormError;

/// How an answer is checked and coerced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldType {
    /// Accept any text.
    #[default]
    None,
    /// ASCII digits only, stored as `i64`.
    Int,
    /// A finite number, stored as `f64`.
    Float,
    /// Explicit text; behaves like `None`.
    String,
}

impl FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" => Ok(FieldType::Int),
            "float" => Ok(FieldType::Float),
            "string" => Ok(FieldType::String),
            "none" | "" => Ok(FieldType::None),
            other => Err(format!("unknown type '{}'", other)),
        }
    }
}

type Predicate = dyn Fn(&str) -> bool + Send + Sync;

/// A caller-supplied predicate with an optional failure message.
#[derive(Clone)]
pub struct Callback {
    predicate: Arc<Predicate>,
    message: Option<String>,
}

impl Callback {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            message: None,
        }
    }

    /// Message shown when the predicate rejects an answer.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn check(&self, input: &str) -> bool {
        (self.predicate)(input)
    }

    pub fn failure_message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("predicate", &"<fn>")
            .field("message", &self.message)
            .finish()
    }
}

/// Checks applied to an answer, in this order.
#[derive(Debug, Clone, Default)]
pub struct Validators {
    pub required: bool,
    /// Maximum length in bytes of the UTF-8 answer.
    pub max_length: Option<usize>,
    pub kind: FieldType,
    pub callback: Option<Callback>,
}

/// One prompt in a form.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    label: String,
    default: Option<String>,
    validators: Validators,
}

impl FieldSpec {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            default: None,
            validators: Validators::default(),
        }
    }

    /// Value used when the answer is empty.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.validators.required = true;
        self
    }

    pub fn max_length(mut self, length: usize) -> Self {
        self.validators.max_length = Some(length);
        self
    }

    pub fn kind(mut self, kind: FieldType) -> Self {
        self.validators.kind = kind;
        self
    }

    /// Accept only answers for which `predicate` returns true.
    pub fn validate<F>(self, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.callback(Callback::new(predicate))
    }

    pub fn callback(mut self, callback: Callback) -> Self {
        self.validators.callback = Some(callback);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub fn validators(&self) -> &Validators {
        &self.validators
    }

    /// Builds a spec from configuration data.
    ///
    /// A string is taken as the label. An object may carry `label`
    /// (defaults to `key`), `default` (any scalar) and `validators` with
    /// `required`, `length` or `max_length`, and `type`. Callbacks cannot be
    /// expressed as data and are rejected.
    pub fn from_config(key: &str, config: &Value) -> Result<Self, FormError> {
        match config {
            Value::String(label) => Ok(FieldSpec::new(label.as_str())),
            Value::Object(map) => Self::from_object(key, map),
            other => Err(FormError::invalid_field(
                key,
                format!("expected a label or an object, got {}", value_kind(other)),
            )),
        }
    }

    fn from_object(key: &str, map: &Map<String, Value>) -> Result<Self, FormError> {
        let label = match map.get("label") {
            None | Some(Value::Null) => key.to_string(),
            Some(Value::String(label)) => label.clone(),
            Some(other) => {
                return Err(FormError::invalid_field(
                    key,
                    format!("label must be a string, got {}", value_kind(other)),
                ))
            }
        };

        let mut spec = FieldSpec::new(label);
        spec.default = match map.get("default") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(v @ (Value::Number(_) | Value::Bool(_))) => Some(v.to_string()),
            Some(other) => {
                return Err(FormError::invalid_field(
                    key,
                    format!("default must be a scalar, got {}", value_kind(other)),
                ))
            }
        };

        match map.get("validators") {
            None | Some(Value::Null) => {}
            Some(Value::Object(validators)) => {
                spec.validators = parse_validators(key, validators)?;
            }
            Some(other) => {
                return Err(FormError::invalid_field(
                    key,
                    format!("validators must be an object, got {}", value_kind(other)),
                ))
            }
        }

        Ok(spec)
    }
}

impl From<&str> for FieldSpec {
    fn from(label: &str) -> Self {
        FieldSpec::new(label)
    }
}

impl From<String> for FieldSpec {
    fn from(label: String) -> Self {
        FieldSpec::new(label)
    }
}

fn parse_validators(key: &str, map: &Map<String, Value>) -> Result<Validators, FormError> {
    let mut validators = Validators::default();

    if let Some(required) = map.get("required") {
        validators.required = match required {
            Value::Bool(b) => *b,
            Value::Null => false,
            other => {
                return Err(FormError::invalid_field(
                    key,
                    format!("required must be a boolean, got {}", value_kind(other)),
                ))
            }
        };
    }

    if let Some(length) = map.get("length").or_else(|| map.get("max_length")) {
        validators.max_length = match length {
            Value::Null => None,
            Value::Number(n) => match n.as_u64() {
                Some(n) => Some(n as usize),
                None => {
                    return Err(FormError::invalid_field(
                        key,
                        format!("length must be a non-negative integer, got {}", n),
                    ))
                }
            },
            other => {
                return Err(FormError::invalid_field(
                    key,
                    format!("length must be a number, got {}", value_kind(other)),
                ))
            }
        };
    }

    if let Some(kind) = map.get("type") {
        validators.kind = match kind {
            Value::Null => FieldType::None,
            Value::String(s) => s
                .parse()
                .map_err(|reason: String| FormError::invalid_field(key, reason))?,
            other => {
                return Err(FormError::invalid_field(
                    key,
                    format!("type must be a string, got {}", value_kind(other)),
                ))
            }
        };
    }

    if map.contains_key("callback") {
        return Err(FormError::invalid_field(
            key,
            "callbacks must be attached in code, not configuration",
        ));
    }

    Ok(validators)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_type_from_str() {
        assert_eq!("int".parse::<FieldType>(), Ok(FieldType::Int));
        assert_eq!("float".parse::<FieldType>(), Ok(FieldType::Float));
        assert_eq!("string".parse::<FieldType>(), Ok(FieldType::String));
        assert!("bool".parse::<FieldType>().is_err());
    }

    #[test]
    fn test_bare_label() {
        let spec = FieldSpec::from_config("name", &json!("Your name")).unwrap();
        assert_eq!(spec.label(), "Your name");
        assert_eq!(spec.default_value(), None);
        assert!(!spec.validators().required);
        assert_eq!(spec.validators().max_length, None);
        assert_eq!(spec.validators().kind, FieldType::None);
    }

    #[test]
    fn test_object_label_defaults_to_key() {
        let spec = FieldSpec::from_config("email", &json!({})).unwrap();
        assert_eq!(spec.label(), "email");
    }

    #[test]
    fn test_full_object() {
        let spec = FieldSpec::from_config(
            "age",
            &json!({
                "label": "Age",
                "default": 30,
                "validators": {"required": true, "length": 3, "type": "int"}
            }),
        )
        .unwrap();
        assert_eq!(spec.label(), "Age");
        assert_eq!(spec.default_value(), Some("30"));
        assert!(spec.validators().required);
        assert_eq!(spec.validators().max_length, Some(3));
        assert_eq!(spec.validators().kind, FieldType::Int);
    }

    #[test]
    fn test_max_length_alias() {
        let spec =
            FieldSpec::from_config("k", &json!({"validators": {"max_length": 5}})).unwrap();
        assert_eq!(spec.validators().max_length, Some(5));
    }

    #[test]
    fn test_scalar_config_is_fatal() {
        let err = FieldSpec::from_config("k", &json!(5)).unwrap_err();
        assert!(matches!(err, FormError::InvalidField { ref field, .. } if field == "k"));
    }

    #[test]
    fn test_unknown_type_is_fatal() {
        let err =
            FieldSpec::from_config("k", &json!({"validators": {"type": "date"}})).unwrap_err();
        assert!(err.to_string().contains("unknown type 'date'"));
    }

    #[test]
    fn test_callback_in_data_is_fatal() {
        let err = FieldSpec::from_config("k", &json!({"validators": {"callback": "is_valid"}}))
            .unwrap_err();
        assert!(matches!(err, FormError::InvalidField { .. }));
    }

    #[test]
    fn test_negative_length_is_fatal() {
        assert!(FieldSpec::from_config("k", &json!({"validators": {"length": -1}})).is_err());
    }

    #[test]
    fn test_builder_callback() {
        let spec = FieldSpec::new("Code")
            .validate(|s| s.starts_with('X'))
            .with_default("X1");
        let callback = spec.validators().callback.as_ref().unwrap();
        assert!(callback.check("X9"));
        assert!(!callback.check("Y9"));
        assert_eq!(callback.failure_message(), None);
        assert!(format!("{:?}", callback).contains("<fn>"));
    }
}
