//! MCP Toolset implementation

use crate::client::McpClient;
use crate::connection::McpConnection;
use crate::prompt::{EnvPromptResolver, PassthroughResolver, PromptResolver};
use crate::tool::McpTool;
use crate::transport::ToolTransport;
use mcpb_core::{Error, Result, ServerConfig, Tool};
use mcpb_tool::ToolCollection;
use std::sync::Arc;

/// Tools imported from one MCP server under a shared namespace.
///
/// Tools are listed once when the toolset connects and are keyed by their
/// qualified name (`namespace.tool`).
pub struct McpToolset {
    name: String,
    description: String,
    tools: ToolCollection<McpTool>,
}

impl McpToolset {
    /// Create a new McpToolset builder
    pub fn builder() -> McpToolsetBuilder {
        McpToolsetBuilder::new()
    }

    /// Connect to the server described by a configuration entry
    pub async fn from_config(server: &ServerConfig) -> Result<Self> {
        let mut builder = Self::builder()
            .name(server.namespace.clone())
            .description(server.description.clone())
            .prompt_resolver(Arc::new(EnvPromptResolver::new()))
            .connection(McpConnection::from_server_config(server)?);

        if let Some(filter) = &server.tools {
            builder = builder.tool_filter(filter.clone());
        }

        builder.connect().await
    }

    /// Namespace assigned to every tool
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved namespace description
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn has_tools(&self) -> bool {
        !self.tools.is_empty()
    }

    pub fn tools(&self) -> &ToolCollection<McpTool> {
        &self.tools
    }

    /// Look up a tool by qualified name
    pub fn get_tool(&self, full_name: &str) -> Option<Arc<McpTool>> {
        self.tools.get(full_name)
    }

    pub fn tool_names(&self) -> Vec<String> {
        self.tools.keys().map(str::to_owned).collect()
    }

    /// All tools as trait objects
    pub fn to_dyn(&self) -> Vec<Arc<dyn Tool>> {
        self.tools.to_dyn()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Builder for McpToolset
pub struct McpToolsetBuilder {
    name: String,
    description: String,
    connection: Option<McpConnection>,
    transport: Option<Arc<dyn ToolTransport>>,
    tool_filter: Option<Vec<String>>,
    prompt_resolver: Arc<dyn PromptResolver>,
}

impl McpToolsetBuilder {
    fn new() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            connection: None,
            transport: None,
            tool_filter: None,
            prompt_resolver: Arc::new(PassthroughResolver),
        }
    }

    /// Set the namespace of the toolset
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the namespace description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the connection parameters
    pub fn connection(mut self, connection: impl Into<McpConnection>) -> Self {
        self.connection = Some(connection.into());
        self
    }

    /// Connect to a streamable HTTP endpoint
    pub fn url(self, url: impl Into<String>) -> Self {
        self.connection(McpConnection::http(url))
    }

    /// Use an already established transport instead of connecting
    pub fn transport(mut self, transport: Arc<dyn ToolTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Set a filter for which tools to include
    pub fn tool_filter(mut self, filter: Vec<String>) -> Self {
        self.tool_filter = Some(filter);
        self
    }

    /// Set the resolver applied to the namespace description
    pub fn prompt_resolver(mut self, resolver: Arc<dyn PromptResolver>) -> Self {
        self.prompt_resolver = resolver;
        self
    }

    /// Connect, list the server's tools and wrap each one.
    pub async fn connect(self) -> Result<McpToolset> {
        let transport: Arc<dyn ToolTransport> = match (self.transport, self.connection) {
            (Some(transport), _) => transport,
            (None, Some(connection)) => {
                let client = McpClient::connect(connection).await.map_err(|e| {
                    Error::transport_error(format!("Failed to create MCP client: {}", e))
                })?;
                Arc::new(client)
            }
            (None, None) => {
                return Err(Error::config_error("Connection parameters are required"));
            }
        };

        tracing::info!(toolset = %self.name, "Loading tools from MCP server");

        let definitions = transport.list_tools().await?;

        let filtered: Vec<_> = match &self.tool_filter {
            Some(filter) => definitions
                .into_iter()
                .filter(|t| filter.contains(&t.name))
                .collect(),
            None => definitions,
        };

        let description = self.prompt_resolver.resolve(&self.description);

        let mut tools = ToolCollection::new();
        for definition in filtered {
            let tool = McpTool::new(Some(definition), transport.clone())?
                .with_namespace(self.name.clone(), description.clone());
            tools.add(tool.full_name(), Arc::new(tool));
        }

        tracing::info!(
            toolset = %self.name,
            count = tools.len(),
            "Loaded tools from MCP server"
        );

        Ok(McpToolset {
            name: self.name,
            description,
            tools,
        })
    }
}
