use crate::core::schema::COLUMN_COUNT;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of the lead export, keyed by source header name.
///
/// Empty cells are stored as `Value::Null` and read back as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Record {
    pub data: HashMap<String, serde_json::Value>,
}

impl Record {
    /// Returns the value for `name`, treating null as absent.
    pub fn field(&self, name: &str) -> Option<&serde_json::Value> {
        self.data.get(name).filter(|value| !value.is_null())
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.data.contains_key(name)
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<serde_json::Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Record {
            data: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// One converted contact, positionally aligned to the import template.
///
/// The length is fixed by the type; unset positions hold an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    values: [String; COLUMN_COUNT],
}

impl OutputRow {
    pub fn new() -> Self {
        Self {
            values: std::array::from_fn(|_| String::new()),
        }
    }

    pub fn set(&mut self, position: usize, value: impl Into<String>) {
        self.values[position] = value.into();
    }

    pub fn get(&self, position: usize) -> &str {
        &self.values[position]
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl Default for OutputRow {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub rows: Vec<OutputRow>,
    pub csv_output: String,
    pub preview: Option<String>,
}
