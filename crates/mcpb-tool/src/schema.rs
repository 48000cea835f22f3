use serde_json::Value;

/// Tool schema builder for manual schema creation
///
/// Produces the `{type, properties, required}` object shape MCP servers
/// publish as a tool's input schema.
#[derive(Debug, Clone)]
pub struct ToolSchema {
    pub type_: String,
    pub properties: serde_json::Map<String, Value>,
    pub required: Vec<String>,
}

impl ToolSchema {
    pub fn new() -> Self {
        Self {
            type_: "object".to_string(),
            properties: serde_json::Map::new(),
            required: Vec::new(),
        }
    }

    pub fn property(
        mut self,
        name: impl Into<String>,
        type_: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let mut prop = serde_json::Map::new();
        prop.insert("type".to_string(), Value::String(type_.into()));
        prop.insert("description".to_string(), Value::String(description.into()));

        self.properties.insert(name.into(), Value::Object(prop));
        self
    }

    /// Add a property carrying a `default` value
    pub fn property_with_default(
        self,
        name: impl Into<String>,
        type_: impl Into<String>,
        description: impl Into<String>,
        default: Value,
    ) -> Self {
        let name = name.into();
        let mut schema = self.property(name.clone(), type_, description);
        if let Some(Value::Object(prop)) = schema.properties.get_mut(&name) {
            prop.insert("default".to_string(), default);
        }
        schema
    }

    /// Add a property from a raw JSON schema fragment
    pub fn raw_property(mut self, name: impl Into<String>, schema: Value) -> Self {
        self.properties.insert(name.into(), schema);
        self
    }

    pub fn required(mut self, name: impl Into<String>) -> Self {
        self.required.push(name.into());
        self
    }

    pub fn build(self) -> Value {
        let mut schema = serde_json::Map::new();
        schema.insert("type".to_string(), Value::String(self.type_));
        schema.insert("properties".to_string(), Value::Object(self.properties));
        if !self.required.is_empty() {
            schema.insert(
                "required".to_string(),
                Value::Array(self.required.into_iter().map(Value::String).collect()),
            );
        }

        Value::Object(schema)
    }
}

impl Default for ToolSchema {
    fn default() -> Self {
        Self::new()
    }
}
