//! MCPB - schema-driven bridge that exposes MCP server tools as local tools.
//!
//! This crate re-exports the workspace crates under one name.

pub use mcpb_core as core;
pub use mcpb_mcp as mcp;
pub use mcpb_telemetry as telemetry;
pub use mcpb_tool as tool;

pub use mcpb_core::{Error, McpbConfig, Result, Tool, ToolContext, ToolResponse};
pub use mcpb_mcp::{McpTool, McpToolset, ToolTransport};
pub use mcpb_telemetry::init_from_config;
