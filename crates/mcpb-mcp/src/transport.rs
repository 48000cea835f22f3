//! Remote invocation transport.

use crate::types::{McpToolInfo, ToolOutput};
use async_trait::async_trait;
use mcpb_core::Result;
use serde_json::{Map, Value};

/// Connection to a host serving tools.
///
/// Implementations own the session: connection setup, authentication and
/// any retry policy live behind this trait. Calls may be issued
/// concurrently.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ToolTransport: Send + Sync {
    /// List the tool definitions the host currently offers.
    async fn list_tools(&self) -> Result<Vec<McpToolInfo>>;

    /// Call a tool once and return its raw output.
    async fn call_tool(&self, name: &str, arguments: Map<String, Value>) -> Result<ToolOutput>;
}
