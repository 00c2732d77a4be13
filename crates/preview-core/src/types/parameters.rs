use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Number, Value};

use crate::errors::BridgeError;

/// Flat parameter overrides, every value already rendered to a string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParameterMap(BTreeMap<String, String>);

impl ParameterMap {
    /// Convert the host's parameter object.
    ///
    /// `null` converts to an empty map. Anything other than an object is an
    /// argument error.
    pub fn from_host(value: &Value) -> Result<Self, BridgeError> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(props) => Ok(Self(
                props
                    .iter()
                    .map(|(k, v)| (k.clone(), host_value_to_string(v)))
                    .collect(),
            )),
            other => Err(BridgeError::InvalidArgument {
                name: "parameters",
                message: format!("expected an object, got {}", value_kind(other)),
            }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

/// Render one host value the way a parameter value is expected to look.
///
/// Strings pass through, numbers use fixed-point notation, booleans become
/// `"true"`/`"false"`, null becomes `""`, arrays and objects become their
/// compact JSON text.
pub fn host_value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_to_string(n),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn number_to_string(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    // f64 Display is the shortest round-trip form and never uses an exponent.
    match n.as_f64() {
        // Negative zero renders as "0", like the host's String(-0).
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// Short name of a JSON value's type, for error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
