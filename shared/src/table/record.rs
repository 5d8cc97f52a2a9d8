use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt;

/// A single cell value pulled out of a record by field name.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    /// Absent field or JSON `null`.
    Missing,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(Cow<'a, str>),
}

impl<'a> FieldValue<'a> {
    pub fn text(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }

    pub fn owned_text(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl<'a, T> From<Option<T>> for FieldValue<'a>
where
    T: Into<FieldValue<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Missing)
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::text(value)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> Self {
        Self::text(value.as_str())
    }
}

impl From<bool> for FieldValue<'_> {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for FieldValue<'_> {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for FieldValue<'_> {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for FieldValue<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => Ok(()),
            Self::Bool(true) => f.write_str("Yes"),
            Self::Bool(false) => f.write_str("No"),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Anything a sortable table can display.
pub trait TableRecord {
    /// Identity, unique within one collection.
    fn record_id(&self) -> Cow<'_, str>;

    /// Value of `key`, or [`FieldValue::Missing`] when the record has no such field.
    fn field(&self, key: &str) -> FieldValue<'_>;
}

/// Column descriptor supplied by the page that owns a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Header text.
    pub label: String,
    /// Field accessor passed to [`TableRecord::field`].
    pub key: String,
}

impl Column {
    pub fn new(label: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            key: key.into(),
        }
    }
}

fn json_field(value: &Value) -> FieldValue<'_> {
    match value {
        Value::Null => FieldValue::Missing,
        Value::Bool(b) => FieldValue::Bool(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => FieldValue::Int(i),
            None => n.as_f64().map(FieldValue::Float).unwrap_or(FieldValue::Missing),
        },
        Value::String(s) => FieldValue::text(s),
        nested => FieldValue::owned_text(nested.to_string()),
    }
}

impl TableRecord for Map<String, Value> {
    fn record_id(&self) -> Cow<'_, str> {
        match self.get("id") {
            Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
            Some(Value::Null) | None => Cow::Borrowed(""),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }

    fn field(&self, key: &str) -> FieldValue<'_> {
        self.get(key).map(json_field).unwrap_or(FieldValue::Missing)
    }
}

impl TableRecord for Value {
    fn record_id(&self) -> Cow<'_, str> {
        match self {
            Value::Object(map) => map.record_id(),
            _ => Cow::Borrowed(""),
        }
    }

    fn field(&self, key: &str) -> FieldValue<'_> {
        match self {
            Value::Object(map) => map.field(key),
            _ => FieldValue::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_json_fields() {
        let record = json!({"id": 7, "name": "Amy", "age": 25, "weight": 56.7, "active": true, "gym": null, "tags": ["bjj"]});
        assert_eq!(record.record_id(), "7");
        assert_eq!(record.field("name"), FieldValue::text("Amy"));
        assert_eq!(record.field("age"), FieldValue::Int(25));
        assert_eq!(record.field("weight"), FieldValue::Float(56.7));
        assert_eq!(record.field("active"), FieldValue::Bool(true));
        assert_eq!(record.field("gym"), FieldValue::Missing);
        assert_eq!(record.field("absent"), FieldValue::Missing);
        assert_eq!(record.field("tags"), FieldValue::owned_text("[\"bjj\"]".to_string()));
    }

    #[test]
    fn test_non_object_has_no_fields() {
        let value = json!([1, 2, 3]);
        assert_eq!(value.record_id(), "");
        assert!(value.field("id").is_missing());
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldValue::Missing.to_string(), "");
        assert_eq!(FieldValue::Bool(false).to_string(), "No");
        assert_eq!(FieldValue::Int(-3).to_string(), "-3");
        assert_eq!(FieldValue::from(Some("x")).to_string(), "x");
        assert_eq!(FieldValue::from(None::<u32>), FieldValue::Missing);
    }
}
