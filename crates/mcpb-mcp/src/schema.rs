//! Input schema extraction.
//!
//! Reads the `properties` and `required` entries of an MCP tool's input
//! schema. Every other schema keyword is ignored.

use crate::parameter::Parameter;
use serde_json::{Map, Value};
use tracing::warn;

/// Build the parameter list of a tool, one entry per schema property in
/// declaration order.
pub fn extract_parameters(schema: &Value) -> Vec<Parameter> {
    let required: Vec<&str> = schema
        .get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let properties = schema.get("properties").and_then(Value::as_object);

    // Required names without a property produce no parameter.
    for name in &required {
        if !properties.is_some_and(|p| p.contains_key(*name)) {
            warn!(parameter = %name, "Required parameter is not declared in schema properties");
        }
    }

    let Some(properties) = properties else {
        return Vec::new();
    };

    properties
        .iter()
        .map(|(name, property)| {
            Parameter::from_property(name.clone(), property, required.contains(&name.as_str()))
        })
        .collect()
}

/// Normalized copy of a schema for introspection:
/// `{"type": "object", "properties": <original properties>}`.
pub fn schema_snapshot(schema: &Value) -> Value {
    let mut snapshot = Map::new();
    snapshot.insert("type".to_string(), Value::String("object".to_string()));

    if let Some(properties) = schema.get("properties") {
        snapshot.insert("properties".to_string(), properties.clone());
    }

    Value::Object(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::{DefaultValue, ParameterType};
    use serde_json::json;

    #[test]
    fn test_no_properties_yields_no_parameters() {
        assert!(extract_parameters(&json!({"type": "object"})).is_empty());
        assert!(extract_parameters(&json!({})).is_empty());
        assert!(extract_parameters(&json!({"properties": "bogus"})).is_empty());
        assert!(extract_parameters(&Value::Null).is_empty());
    }

    #[test]
    fn test_parameters_keep_schema_order() {
        let schema = json!({
            "type": "object",
            "properties": {
                "zeta": {"type": "string"},
                "alpha": {"type": "number"},
                "mid": {"type": "array"}
            }
        });

        let names: Vec<String> = extract_parameters(&schema)
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_required_marks_only_listed_names() {
        let schema = json!({
            "properties": {
                "q": {"type": "string"},
                "limit": {"type": "number"}
            },
            "required": ["q"]
        });

        let params = extract_parameters(&schema);
        assert!(params[0].required);
        assert!(!params[1].required);
    }

    #[test]
    fn test_absent_required_means_all_optional() {
        let schema = json!({"properties": {"a": {}, "b": {}}});
        assert!(extract_parameters(&schema).iter().all(|p| !p.required));
    }

    #[test]
    fn test_orphan_required_name_is_inert() {
        let schema = json!({
            "properties": {"a": {"type": "string"}},
            "required": ["a", "ghost", 7]
        });

        let params = extract_parameters(&schema);
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].name, "a");
        assert!(params[0].required);
    }

    #[test]
    fn test_extracts_descriptor_fields() {
        let schema = json!({
            "properties": {
                "tags": {"type": "array", "description": "Labels", "default": ["x"]},
                "mode": {"type": "enum-ish"}
            }
        });

        let params = extract_parameters(&schema);
        assert_eq!(params[0].parameter_type, ParameterType::Array);
        assert_eq!(params[0].description.as_deref(), Some("Labels"));
        assert_eq!(params[0].default_value, Some(DefaultValue::Raw(r#"["x"]"#.to_string())));
        assert_eq!(params[1].parameter_type, ParameterType::Unspecified);
        assert_eq!(params[1].type_name.as_deref(), Some("enum-ish"));
        assert_eq!(params[1].default_value, None);
    }

    #[test]
    fn test_snapshot_keeps_properties_only() {
        let schema = json!({
            "type": "object",
            "$schema": "http://json-schema.org/draft-07/schema#",
            "properties": {"q": {"type": "string"}},
            "required": ["q"]
        });

        assert_eq!(
            schema_snapshot(&schema),
            json!({"type": "object", "properties": {"q": {"type": "string"}}})
        );
    }

    #[test]
    fn test_snapshot_without_properties() {
        assert_eq!(schema_snapshot(&json!({"required": ["x"]})), json!({"type": "object"}));
    }
}
