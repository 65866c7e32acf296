//! Row and column types for table rendering.
//!
//! Records are normalized into [`Row`]s through `serde_json`, so any
//! `Serialize` type works as input: structs and maps become keyed rows,
//! sequences and tuples become positional rows keyed `"0"`, `"1"`, ...
//! Anything else (numbers, strings, null) is not a row and is dropped.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// An ordered mapping from field key to display text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<(String, String)>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cell, replacing any existing cell with the same key in place.
    pub fn cell(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key.into(), value.into());
        self
    }

    fn insert(&mut self, key: String, value: String) {
        match self.cells.iter_mut().find(|(k, _)| *k == key) {
            Some(existing) => existing.1 = value,
            None => self.cells.push((key, value)),
        }
    }

    /// Normalizes a JSON value into a row.
    ///
    /// Objects keep their key order; arrays are keyed by position.
    /// Returns `None` for scalars.
    pub fn from_value(value: &Value) -> Option<Row> {
        match value {
            Value::Object(map) => Some(Row {
                cells: map
                    .iter()
                    .map(|(k, v)| (k.clone(), display_text(v)))
                    .collect(),
            }),
            Value::Array(items) => Some(Row {
                cells: items
                    .iter()
                    .enumerate()
                    .map(|(i, v)| (i.to_string(), display_text(v)))
                    .collect(),
            }),
            _ => None,
        }
    }

    /// Normalizes any serializable record into a row.
    pub fn from_record<T: Serialize + ?Sized>(record: &T) -> Option<Row> {
        serde_json::to_value(record)
            .ok()
            .and_then(|value| Row::from_value(&value))
    }

    /// Display text for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Keys in row order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(k, _)| k.as_str())
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (k, v) in &self.cells {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Row::new(), |row, (k, v)| row.cell(k, v))
    }
}

/// Normalizes a slice of records, silently dropping those that are not rows.
pub fn normalize_rows<T: Serialize>(records: &[T]) -> Vec<Row> {
    records.iter().filter_map(Row::from_record).collect()
}

/// Display text for a single cell value.
fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Explicit column selection: ordered field keys with their header labels.
///
/// # Example
///
/// ```rust
/// use termkit_render::tabular::ColumnSpec;
///
/// let columns = ColumnSpec::new()
///     .column("id", "ID")
///     .column("name", "Name");
/// assert_eq!(columns.keys().collect::<Vec<_>>(), vec!["id", "name"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnSpec {
    columns: Vec<(String, String)>,
}

impl ColumnSpec {
    /// Create an empty column selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column showing `key` under the header `label`.
    pub fn column(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.columns.push((key.into(), label.into()));
        self
    }

    /// Columns derived from a row: its keys, each labelled with itself.
    pub fn from_row(row: &Row) -> Self {
        row.keys().map(|k| (k, k)).collect()
    }

    /// Field keys in display order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(k, _)| k.as_str())
    }

    /// Header labels in display order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(_, l)| l.as_str())
    }

    /// `(key, label)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns.iter().map(|(k, l)| (k.as_str(), l.as_str()))
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if no columns were selected.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<K: Into<String>, L: Into<String>> FromIterator<(K, L)> for ColumnSpec {
    fn from_iter<I: IntoIterator<Item = (K, L)>>(iter: I) -> Self {
        ColumnSpec {
            columns: iter
                .into_iter()
                .map(|(k, l)| (k.into(), l.into()))
                .collect(),
        }
    }
}
