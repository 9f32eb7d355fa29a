use std::fmt;

use crate::error::{JsonHashError, Result};

/// Parsed JSON value.
///
/// Objects keep their entries in the order they were given; nothing that
/// hashes a value may depend on that order.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Object(Vec<(String, JsonValue)>),
    Array(Vec<JsonValue>),
    String(String),
    Number(f64),
    Bool(bool),
    Null,
}

/// Variant tag of a `JsonValue`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Object,
    Array,
    String,
    Number,
    Bool,
    Null,
}

impl ValueKind {
    pub const fn name(&self) -> &'static str {
        match self {
            ValueKind::Object => "object",
            ValueKind::Array => "array",
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Bool => "boolean",
            ValueKind::Null => "null",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl JsonValue {
    /// Parse JSON text into a value
    pub fn parse(text: &str) -> Result<Self> {
        let raw: serde_json::Value = serde_json::from_str(text)?;
        JsonValue::try_from(raw)
    }

    /// Build an object from key/value pairs, keeping their order
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, JsonValue)>,
    {
        JsonValue::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn array<I: IntoIterator<Item = JsonValue>>(items: I) -> Self {
        JsonValue::Array(items.into_iter().collect())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            JsonValue::Object(_) => ValueKind::Object,
            JsonValue::Array(_) => ValueKind::Array,
            JsonValue::String(_) => ValueKind::String,
            JsonValue::Number(_) => ValueKind::Number,
            JsonValue::Bool(_) => ValueKind::Bool,
            JsonValue::Null => ValueKind::Null,
        }
    }

    /// Look up an object member by key (first match)
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        match self {
            JsonValue::Object(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Number of values in this tree, including itself
    pub fn node_count(&self) -> usize {
        let mut pending = vec![self];
        let mut count = 0;
        while let Some(value) = pending.pop() {
            count += 1;
            match value {
                JsonValue::Object(entries) => pending.extend(entries.iter().map(|(_, v)| v)),
                JsonValue::Array(items) => pending.extend(items.iter()),
                _ => {}
            }
        }
        count
    }
}

// Children are moved onto a heap stack before they drop, so tearing down a
// deeply nested value never recurses.
impl Drop for JsonValue {
    fn drop(&mut self) {
        let mut pending: Vec<JsonValue> = Vec::new();
        take_children(self, &mut pending);
        while let Some(mut value) = pending.pop() {
            take_children(&mut value, &mut pending);
        }
    }
}

fn take_children(value: &mut JsonValue, pending: &mut Vec<JsonValue>) {
    match value {
        JsonValue::Array(items) => pending.append(items),
        JsonValue::Object(entries) => pending.extend(entries.drain(..).map(|(_, v)| v)),
        _ => {}
    }
}

/// Detect the kind of the top-level value in a JSON text
pub fn kind_of_text(text: &str) -> Result<ValueKind> {
    Ok(JsonValue::parse(text)?.kind())
}

impl TryFrom<serde_json::Value> for JsonValue {
    type Error = JsonHashError;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        Ok(match value {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(b) => JsonValue::Bool(b),
            serde_json::Value::Number(n) => JsonValue::Number(
                n.as_f64()
                    .ok_or_else(|| JsonHashError::UnrepresentableNumber(n.to_string()))?,
            ),
            serde_json::Value::String(s) => JsonValue::String(s),
            serde_json::Value::Array(items) => JsonValue::Array(
                items
                    .into_iter()
                    .map(JsonValue::try_from)
                    .collect::<Result<Vec<_>>>()?,
            ),
            serde_json::Value::Object(map) => JsonValue::Object(
                map.into_iter()
                    .map(|(k, v)| Ok((k, JsonValue::try_from(v)?)))
                    .collect::<Result<Vec<_>>>()?,
            ),
        })
    }
}

impl From<bool> for JsonValue {
    fn from(b: bool) -> Self {
        JsonValue::Bool(b)
    }
}

impl From<f64> for JsonValue {
    fn from(n: f64) -> Self {
        JsonValue::Number(n)
    }
}

impl From<i64> for JsonValue {
    fn from(n: i64) -> Self {
        JsonValue::Number(n as f64)
    }
}

impl From<&str> for JsonValue {
    fn from(s: &str) -> Self {
        JsonValue::String(s.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(s: String) -> Self {
        JsonValue::String(s)
    }
}

impl<T: Into<JsonValue>> From<Option<T>> for JsonValue {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(JsonValue::Null, Into::into)
    }
}

impl<T: Into<JsonValue>> From<Vec<T>> for JsonValue {
    fn from(items: Vec<T>) -> Self {
        JsonValue::Array(items.into_iter().map(Into::into).collect())
    }
}
