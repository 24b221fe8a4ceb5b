//! Generic record payload returned by the record-retrieval service.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Qualified field reference, e.g. `Contact.Home_Country__c`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldRef {
    object_api_name: String,
    field_api_name: String,
}

impl FieldRef {
    pub fn new(object_api_name: impl Into<String>, field_api_name: impl Into<String>) -> Self {
        Self {
            object_api_name: object_api_name.into(),
            field_api_name: field_api_name.into(),
        }
    }

    pub fn object_api_name(&self) -> &str {
        &self.object_api_name
    }

    pub fn field_api_name(&self) -> &str {
        &self.field_api_name
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.object_api_name, self.field_api_name)
    }
}

impl FromStr for FieldRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().split_once('.') {
            Some((object, field)) if !object.is_empty() && !field.is_empty() => {
                Ok(FieldRef::new(object, field))
            }
            _ => Err(format!(
                "Invalid field reference '{}': expected Object.Field",
                s
            )),
        }
    }
}

impl TryFrom<String> for FieldRef {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FieldRef> for String {
    fn from(value: FieldRef) -> Self {
        value.to_string()
    }
}

/// Comma separated list for the `fields` query parameter.
pub fn join_fields(fields: &[FieldRef]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Record as delivered by the record service: an id plus raw field values.
///
/// A field value is either a bare scalar or an object of the form
/// `{"value": ..., "displayValue": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordData {
    pub id: String,
    #[serde(default)]
    pub fields: BTreeMap<String, Value>,
}

impl RecordData {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Value of a field as a string; `None` for missing or null fields.
    pub fn field_value(&self, field: &FieldRef) -> Option<String> {
        self.fields
            .get(field.field_api_name())
            .and_then(scalar_to_string)
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Array(_) => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Object(map) => map.get("value").and_then(scalar_to_string),
    }
}
