//! # MCPB Telemetry
//!
//! Tracing setup and span helpers for MCP tool invocations.
//!
//! `init_from_config` wires a `tracing` subscriber with an OpenTelemetry layer
//! and structured log output, named and filtered by the `[observability]`
//! config section. `trace_tool_call` records one span per tool invocation
//! using the OpenTelemetry generative-AI attribute names.

mod spans;
mod tracer;

pub use spans::{ToolSpanAttributes, trace_tool_call};
pub use tracer::{init_from_config, init_telemetry, service_name, tracer_provider};

/// OpenTelemetry span attribute constants for tool observability.
pub mod attributes {
    pub const GEN_AI_OPERATION_NAME: &str = "gen_ai.operation.name";
    pub const GEN_AI_SYSTEM: &str = "gen_ai.system";

    // Tool-specific attributes
    pub const GEN_AI_TOOL_NAME: &str = "gen_ai.tool.name";
    pub const GEN_AI_TOOL_DESCRIPTION: &str = "gen_ai.tool.description";
    pub const GEN_AI_TOOL_CALL_ID: &str = "gen_ai.tool.call.id";

    // MCP bridge attributes
    pub const MCPB_TOOL_NAMESPACE: &str = "mcpb.tool.namespace";
    pub const MCPB_INVOCATION_ID: &str = "mcpb.invocation_id";
    pub const MCPB_TOOL_CALL_ARGS: &str = "mcpb.tool_call_args";
    pub const MCPB_TOOL_RESPONSE: &str = "mcpb.tool_response";
    pub const MCPB_TOOL_OUTCOME: &str = "mcpb.tool_outcome";

    // System name constant
    pub const SYSTEM_NAME: &str = "mcpb";
}
