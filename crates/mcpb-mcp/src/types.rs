//! Types for MCP integration

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Information about an MCP tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpToolInfo {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

impl McpToolInfo {
    pub fn new(name: impl Into<String>, description: impl Into<String>, input_schema: Value) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}

/// Raw output of a remote tool call, before normalization
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    /// Textual result, expected to hold JSON
    Text(String),
    /// Result the server already delivered as structured data
    Structured(Value),
}
