//! Tool utilities for MCPB
//!
//! This crate provides the pieces shared by every tool source:
//! - Default tool context
//! - Manual JSON schema builder
//! - Keyed tool collection

pub mod collection;
pub mod context;
pub mod schema;

// Re-exports
pub use collection::ToolCollection;
pub use context::DefaultToolContext;
pub use schema::ToolSchema;

// Re-export core types
pub use mcpb_core::{Result, Tool, ToolContext, ToolResponse};
