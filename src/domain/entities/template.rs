//! Template entity - a declarative stack description
//!
//! The tool never interprets resources. It only needs the declared parameter
//! names and a compact wire form to upload.

use serde_json::{Map, Value};

/// A loaded stack template
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    body: Map<String, Value>,
}

impl Template {
    /// Wrap a parsed document; the top level must be an object
    pub fn from_value(value: Value) -> Result<Self, String> {
        match value {
            Value::Object(body) => Ok(Self { body }),
            other => Err(format!(
                "expected an object at the top level, found {}",
                value_kind(&other)
            )),
        }
    }

    /// Parameter names in the order the template declares them
    pub fn parameter_names(&self) -> Vec<String> {
        self.body
            .get("Parameters")
            .and_then(Value::as_object)
            .map(|params| params.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Optional `Description` field
    pub fn description(&self) -> Option<&str> {
        self.body.get("Description").and_then(Value::as_str)
    }

    /// Wire form: JSON without insignificant whitespace
    pub fn to_compact_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.body)
    }

    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.body)
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.body.clone())
    }
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
