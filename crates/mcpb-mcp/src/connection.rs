//! Connection parameters for MCP servers

use mcpb_core::{Error, Result, ServerConfig};
use std::collections::HashMap;

/// Parameters for connecting to an MCP server via stdio subprocess
#[derive(Debug, Clone, PartialEq)]
pub struct StdioConnectionParams {
    pub command: String,
    pub args: Vec<String>,
    pub env: HashMap<String, String>,
}

impl StdioConnectionParams {
    /// Create new connection parameters with the given command
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
            env: HashMap::new(),
        }
    }

    /// Add a command-line argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add an environment variable
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }
}

/// How to reach an MCP server
#[derive(Debug, Clone, PartialEq)]
pub enum McpConnection {
    /// Spawn the server as a child process and talk over stdio
    Stdio(StdioConnectionParams),
    /// Streamable HTTP endpoint
    Http { url: String },
}

impl McpConnection {
    pub fn http(url: impl Into<String>) -> Self {
        McpConnection::Http { url: url.into() }
    }

    /// Connection described by a `[[servers]]` configuration entry
    pub fn from_server_config(server: &ServerConfig) -> Result<Self> {
        match (&server.command, &server.url) {
            (Some(command), None) => {
                let mut params = StdioConnectionParams::new(command.clone());
                params.args = server.args.clone();
                params.env = server.env.clone();
                Ok(McpConnection::Stdio(params))
            }
            (None, Some(url)) => Ok(McpConnection::http(url.clone())),
            _ => Err(Error::config_error(format!(
                "Server '{}' needs exactly one of command or url",
                server.namespace
            ))),
        }
    }
}

impl From<StdioConnectionParams> for McpConnection {
    fn from(params: StdioConnectionParams) -> Self {
        McpConnection::Stdio(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_params() {
        let params = StdioConnectionParams::new("test-command")
            .arg("--flag")
            .env("KEY", "value");

        assert_eq!(params.command, "test-command");
        assert_eq!(params.args.len(), 1);
        assert_eq!(params.env.len(), 1);
    }

    #[test]
    fn test_from_stdio_server_config() {
        let server = ServerConfig {
            namespace: "fs".to_string(),
            command: Some("mcp-fs".to_string()),
            args: vec!["--ro".to_string()],
            ..Default::default()
        };

        match McpConnection::from_server_config(&server).unwrap() {
            McpConnection::Stdio(params) => {
                assert_eq!(params.command, "mcp-fs");
                assert_eq!(params.args, vec!["--ro"]);
            }
            other => panic!("unexpected connection: {other:?}"),
        }
    }

    #[test]
    fn test_from_http_server_config() {
        let server = ServerConfig {
            url: Some("http://localhost:9000/mcp".to_string()),
            ..Default::default()
        };

        assert_eq!(
            McpConnection::from_server_config(&server).unwrap(),
            McpConnection::http("http://localhost:9000/mcp")
        );
    }

    #[test]
    fn test_server_config_without_endpoint() {
        let err = McpConnection::from_server_config(&ServerConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
