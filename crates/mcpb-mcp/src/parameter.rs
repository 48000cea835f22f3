//! Parameter descriptors derived from a tool's input schema.
//!
//! Every lookup into the schema goes through `Option`-returning accessors, so
//! a missing or oddly-typed key falls back to a defined value instead of
//! failing.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Semantic type of a parameter, derived from the schema `type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    String,
    Number,
    Array,
    /// Unknown tag; values are passed through untouched
    Unspecified,
}

impl ParameterType {
    /// Map a property schema to its semantic type.
    ///
    /// | `type` tag  | result        |
    /// |-------------|---------------|
    /// | `"string"`  | `String`      |
    /// | `"number"`  | `Number`      |
    /// | `"array"`   | `Array`       |
    /// | absent      | `String`      |
    /// | other       | `Unspecified` |
    pub fn from_schema(property: &Value) -> Self {
        let Some(tag) = property.get("type") else {
            return ParameterType::String;
        };

        match tag.as_str() {
            Some("string") => ParameterType::String,
            Some("number") => ParameterType::Number,
            Some("array") => ParameterType::Array,
            _ => ParameterType::Unspecified,
        }
    }
}

impl std::fmt::Display for ParameterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterType::String => write!(f, "string"),
            ParameterType::Number => write!(f, "number"),
            ParameterType::Array => write!(f, "array"),
            ParameterType::Unspecified => write!(f, "unspecified"),
        }
    }
}

/// Literal default value of a parameter.
///
/// Chosen by the JSON kind of the `default` entry, not by the declared
/// `type`: `{"type": "number", "default": "5"}` yields `String("5")`.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    String(String),
    Number(f64),
    Bool(bool),
    /// Compact JSON text of an object, array or null default
    Raw(String),
}

impl DefaultValue {
    /// Extract the `default` of a property schema, if there is one.
    pub fn from_schema(property: &Value) -> Option<Self> {
        property.get("default").map(Self::from_value)
    }

    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => DefaultValue::String(s.clone()),
            Value::Number(n) => DefaultValue::Number(n.as_f64().unwrap_or_default()),
            Value::Bool(b) => DefaultValue::Bool(*b),
            other => DefaultValue::Raw(other.to_string()),
        }
    }

    /// The value sent to the remote tool when this default is applied.
    pub fn to_value(&self) -> Value {
        match self {
            DefaultValue::String(s) | DefaultValue::Raw(s) => Value::String(s.clone()),
            DefaultValue::Number(n) => Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            DefaultValue::Bool(b) => Value::Bool(*b),
        }
    }
}

/// One entry of a tool's parameter list.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub parameter_type: ParameterType,
    pub required: bool,
    pub default_value: Option<DefaultValue>,
    /// The `type` tag exactly as the schema declared it
    pub type_name: Option<String>,
    pub description: Option<String>,
}

impl Parameter {
    pub fn from_property(name: impl Into<String>, property: &Value, required: bool) -> Self {
        Self {
            name: name.into(),
            parameter_type: ParameterType::from_schema(property),
            required,
            default_value: DefaultValue::from_schema(property),
            type_name: property
                .get("type")
                .and_then(Value::as_str)
                .map(str::to_owned),
            description: property
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_owned),
        }
    }
}
