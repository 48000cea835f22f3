//! Call-time argument binding.
//!
//! Reconciles the caller's argument map with a tool's parameter list. Binding
//! never fails: values that do not fit a parameter's type are forwarded as
//! they are and left for the remote tool to validate.

use crate::parameter::{Parameter, ParameterType};
use indexmap::IndexMap;
use serde_json::{Map, Number, Value};

/// The value bound to one parameter for a single call.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundValue {
    /// Caller value (after coercion) or an applied default
    Value(Value),
    /// Optional parameter with neither a caller value nor a default
    Absent,
    /// Required parameter the caller did not supply
    Missing,
}

impl BoundValue {
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            BoundValue::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, BoundValue::Missing)
    }
}

/// Per-call bound arguments, ordered like the tool's parameter list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundArguments {
    entries: IndexMap<String, BoundValue>,
}

impl BoundArguments {
    pub fn get(&self, name: &str) -> Option<&BoundValue> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BoundValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Names of required parameters the caller left out
    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, v)| v.is_missing())
            .map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Argument map sent over the wire. `Absent` and `Missing` entries are
    /// left out; the remote tool decides whether that is acceptable.
    pub fn into_call_arguments(self) -> Map<String, Value> {
        self.entries
            .into_iter()
            .filter_map(|(name, value)| match value {
                BoundValue::Value(v) => Some((name, v)),
                BoundValue::Absent | BoundValue::Missing => None,
            })
            .collect()
    }
}

/// Bind caller arguments against `parameters`. Keys that name no parameter
/// are ignored.
pub fn bind(parameters: &[Parameter], arguments: &Map<String, Value>) -> BoundArguments {
    let entries = parameters
        .iter()
        .map(|param| {
            let value = match arguments.get(&param.name) {
                Some(value) => BoundValue::Value(coerce(value, param.parameter_type)),
                None if !param.required => param
                    .default_value
                    .as_ref()
                    .map(|default| BoundValue::Value(default.to_value()))
                    .unwrap_or(BoundValue::Absent),
                None => BoundValue::Missing,
            };
            (param.name.clone(), value)
        })
        .collect::<IndexMap<_, _>>();

    BoundArguments { entries }
}

/// Best-effort conversion of `value` to `target`. Values that cannot be
/// converted come back unchanged.
pub fn coerce(value: &Value, target: ParameterType) -> Value {
    match target {
        ParameterType::Number => match value {
            Value::Number(n) => n
                .as_f64()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .unwrap_or_else(|| value.clone()),
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .unwrap_or_else(|| value.clone()),
            _ => value.clone(),
        },
        ParameterType::String => match value {
            Value::Number(n) => Value::String(n.to_string()),
            Value::Bool(b) => Value::String(b.to_string()),
            _ => value.clone(),
        },
        ParameterType::Array | ParameterType::Unspecified => value.clone(),
    }
}
