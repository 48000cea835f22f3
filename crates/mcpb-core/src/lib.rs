//! Core traits and types for MCPB
//!
//! This crate provides the shared abstractions used by the MCP bridge:
//! the error type, the `Tool` trait and its execution context, and
//! configuration loading.

pub mod config;
pub mod context;
pub mod error;
pub mod traits;

// Re-exports
pub use config::{McpbConfig, ObservabilityConfig, ServerConfig};
pub use context::ToolContext;
pub use error::{Error, Result};
pub use traits::{Tool, ToolResponse};
