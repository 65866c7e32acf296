//! Accepted answers.

use std::fmt;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// An accepted answer, coerced according to the field's type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FormValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl FormValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FormValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric value; integers widen to `f64`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            FormValue::Float(f) => Some(*f),
            FormValue::Int(n) => Some(*n as f64),
            FormValue::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FormValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FormValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormValue::Int(n) => write!(f, "{}", n),
            FormValue::Float(x) => write!(f, "{}", x),
            FormValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FormValue {
    fn from(s: &str) -> Self {
        FormValue::Text(s.to_string())
    }
}

impl From<i64> for FormValue {
    fn from(n: i64) -> Self {
        FormValue::Int(n)
    }
}

impl From<f64> for FormValue {
    fn from(x: f64) -> Self {
        FormValue::Float(x)
    }
}

/// Answers keyed by field, in the order the fields were asked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormResult {
    values: Vec<(String, FormValue)>,
}

impl FormResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an answer, replacing an earlier one for the same key in place.
    pub fn insert(&mut self, key: impl Into<String>, value: FormValue) {
        let key = key.into();
        match self.values.iter_mut().find(|(k, _)| *k == key) {
            Some(existing) => existing.1 = value,
            None => self.values.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FormValue> {
        self.values.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The answers as an ordered JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl Serialize for FormResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (k, v) in &self.values {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'a> IntoIterator for &'a FormResult {
    type Item = (&'a str, &'a FormValue);
    type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
