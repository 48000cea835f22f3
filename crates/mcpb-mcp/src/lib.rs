//! MCP (Model Context Protocol) integration for MCPB
//!
//! Imports tools from MCP servers and exposes each one as an `McpTool`:
//! the tool's input schema becomes an immutable parameter list, caller
//! arguments are bound against it on every call (defaults applied, values
//! coerced, missing required arguments marked), and the remote result is
//! parsed into a JSON value.
//!
//! ## Example
//!
//! ```no_run
//! use mcpb_mcp::{McpToolset, StdioConnectionParams};
//! use serde_json::json;
//!
//! # #[tokio::main]
//! # async fn main() -> mcpb_core::Result<()> {
//! let toolset = McpToolset::builder()
//!     .name("files")
//!     .description("Local file access")
//!     .connection(StdioConnectionParams::new("mcp-server-filesystem").arg("/tmp"))
//!     .connect()
//!     .await?;
//!
//! if let Some(tool) = toolset.get_tool("files.read_file") {
//!     let args = json!({"path": "/tmp/notes.txt"});
//!     let result = tool.invoke(args.as_object().unwrap()).await?;
//!     println!("{result}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod binder;
pub mod bridge;
pub mod client;
pub mod connection;
pub mod parameter;
pub mod prompt;
pub mod schema;
pub mod tool;
pub mod toolset;
pub mod transport;
pub mod types;

// Re-exports
pub use binder::{BoundArguments, BoundValue};
pub use bridge::InvocationState;
pub use client::McpClient;
pub use connection::{McpConnection, StdioConnectionParams};
pub use parameter::{DefaultValue, Parameter, ParameterType};
pub use prompt::{EnvPromptResolver, PassthroughResolver, PromptResolver};
pub use tool::McpTool;
pub use toolset::{McpToolset, McpToolsetBuilder};
pub use transport::ToolTransport;
pub use types::{McpToolInfo, ToolOutput};
