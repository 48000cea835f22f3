//! MCP client wrapper using rmcp SDK

use crate::connection::{McpConnection, StdioConnectionParams};
use crate::transport::ToolTransport;
use crate::types::{McpToolInfo, ToolOutput};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use mcpb_core::Error;
use rmcp::model::CallToolRequestParam;
use rmcp::service::{RoleClient, RunningService};
use rmcp::transport::{StreamableHttpClientTransport, TokioChildProcess};
use rmcp::ServiceExt;
use serde_json::{Map, Value};
use tokio::process::Command;

/// MCP client that wraps the rmcp SDK
///
/// This wraps a RunningService from rmcp to provide a simpler API. The
/// underlying peer multiplexes requests, so one client serves concurrent
/// tool calls.
pub struct McpClient {
    service: RunningService<RoleClient, ()>,
}

impl McpClient {
    /// Connect using the given connection description
    pub async fn connect(connection: McpConnection) -> Result<Self> {
        match connection {
            McpConnection::Stdio(params) => Self::new(params).await,
            McpConnection::Http { url } => Self::from_url(&url).await,
        }
    }

    /// Create a new MCP client by spawning a subprocess
    pub async fn new(params: StdioConnectionParams) -> Result<Self> {
        tracing::debug!(
            command = %params.command,
            args = ?params.args,
            "Initializing stdio MCP client"
        );

        let mut command = Command::new(&params.command);
        for arg in &params.args {
            command.arg(arg);
        }
        for (key, value) in &params.env {
            command.env(key, value);
        }

        let transport = TokioChildProcess::new(command)?;
        let service = ().serve(transport).await?;

        tracing::info!(
            server_info = ?service.peer_info(),
            "MCP client initialized successfully"
        );

        Ok(Self { service })
    }

    /// Create a new MCP client for a streamable HTTP endpoint
    pub async fn from_url(url: &str) -> Result<Self> {
        tracing::debug!(url = %url, "Initializing HTTP MCP client");

        let transport = StreamableHttpClientTransport::from_uri(url.to_string());
        let service = ().serve(transport).await?;

        tracing::info!(
            server_info = ?service.peer_info(),
            "MCP client initialized successfully"
        );

        Ok(Self { service })
    }

    /// List all available tools from the MCP server
    pub async fn list_tools(&self) -> Result<Vec<McpToolInfo>> {
        tracing::debug!("Listing tools from MCP server");

        let response = self.service.list_tools(Default::default()).await?;

        let tools: Vec<McpToolInfo> = response
            .tools
            .into_iter()
            .map(|tool| McpToolInfo {
                name: tool.name.into_owned(),
                description: tool.description.map(|d| d.into_owned()).unwrap_or_default(),
                input_schema: Value::Object((*tool.input_schema).clone()),
            })
            .collect();

        tracing::debug!(count = tools.len(), "Retrieved tools from MCP server");

        Ok(tools)
    }

    /// Call a tool on the MCP server
    pub async fn call_tool(&self, name: &str, arguments: Map<String, Value>) -> Result<ToolOutput> {
        tracing::debug!(tool = %name, "Calling MCP tool");

        let params = CallToolRequestParam {
            name: name.to_string().into(),
            arguments: Some(arguments),
        };

        let response = self.service.call_tool(params).await?;
        tool_output(serde_json::to_value(&response)?)
    }
}

/// Map a serialized `CallToolResult` to raw tool output.
///
/// Structured content wins. Otherwise the text blocks are joined with
/// newlines; a result without any text block is returned as its content
/// array.
fn tool_output(response: Value) -> Result<ToolOutput> {
    let content = response
        .get("content")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    let texts: Vec<&str> = content
        .iter()
        .filter(|block| block.get("type").and_then(Value::as_str) == Some("text"))
        .filter_map(|block| block.get("text").and_then(Value::as_str))
        .collect();

    if response.get("isError").and_then(Value::as_bool).unwrap_or(false) {
        return Err(anyhow!("{}", texts.join("\n")));
    }

    if let Some(structured) = response.get("structuredContent").filter(|v| !v.is_null()) {
        return Ok(ToolOutput::Structured(structured.clone()));
    }

    if texts.is_empty() {
        return Ok(ToolOutput::Structured(Value::Array(content)));
    }

    Ok(ToolOutput::Text(texts.join("\n")))
}

#[async_trait]
impl ToolTransport for McpClient {
    async fn list_tools(&self) -> mcpb_core::Result<Vec<McpToolInfo>> {
        McpClient::list_tools(self)
            .await
            .map_err(|e| Error::transport_error(format!("Failed to list tools: {}", e)))
    }

    async fn call_tool(
        &self,
        name: &str,
        arguments: Map<String, Value>,
    ) -> mcpb_core::Result<ToolOutput> {
        McpClient::call_tool(self, name, arguments)
            .await
            .map_err(|e| Error::invocation(name, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_text_block() {
        let output = tool_output(json!({
            "content": [{"type": "text", "text": "{\"ok\":true}"}],
            "isError": false
        }))
        .unwrap();

        assert_eq!(output, ToolOutput::Text("{\"ok\":true}".to_string()));
    }

    #[test]
    fn test_structured_content_preferred() {
        let output = tool_output(json!({
            "content": [{"type": "text", "text": "summary"}],
            "structuredContent": {"count": 3}
        }))
        .unwrap();

        assert_eq!(output, ToolOutput::Structured(json!({"count": 3})));
    }

    #[test]
    fn test_error_result_fails() {
        let err = tool_output(json!({
            "content": [{"type": "text", "text": "bad input"}],
            "isError": true
        }))
        .unwrap_err();

        assert_eq!(err.to_string(), "bad input");
    }

    #[test]
    fn test_non_text_content_kept_as_array() {
        let output = tool_output(json!({
            "content": [{"type": "image", "data": "AAAA", "mimeType": "image/png"}]
        }))
        .unwrap();

        match output {
            ToolOutput::Structured(Value::Array(blocks)) => assert_eq!(blocks[0]["type"], "image"),
            other => panic!("unexpected output: {other:?}"),
        }
    }

    #[test]
    fn test_text_blocks_joined() {
        let output = tool_output(json!({
            "content": [
                {"type": "text", "text": "[1,"},
                {"type": "text", "text": "2]"}
            ]
        }))
        .unwrap();

        assert_eq!(output, ToolOutput::Text("[1,\n2]".to_string()));
    }
}
