//! Span creation helpers for tool executions

use crate::attributes::*;

/// Attributes for tracing a tool call
#[derive(Debug, Clone, Default)]
pub struct ToolSpanAttributes {
    pub tool_name: String,
    pub tool_description: String,
    pub namespace: String,
    pub tool_call_id: String,
    pub invocation_id: String,
    pub args_json: String,
    pub response_json: String,
    /// `completed` or `failed`
    pub outcome: String,
}

/// Create and record an OpenTelemetry span for a tool execution.
///
/// Records the tool identity, call ids, arguments and response so a tool
/// call can be followed across the bridge and the remote server.
pub fn trace_tool_call(attrs: ToolSpanAttributes) {
    let span = tracing::info_span!(
        "execute_tool",
        { GEN_AI_SYSTEM } = SYSTEM_NAME,
        { GEN_AI_OPERATION_NAME } = "execute_tool",
        { GEN_AI_TOOL_NAME } = %attrs.tool_name,
        { GEN_AI_TOOL_DESCRIPTION } = %attrs.tool_description,
        { GEN_AI_TOOL_CALL_ID } = %attrs.tool_call_id,
        { MCPB_TOOL_NAMESPACE } = %attrs.namespace,
        { MCPB_INVOCATION_ID } = %attrs.invocation_id,
        { MCPB_TOOL_CALL_ARGS } = %attrs.args_json,
        { MCPB_TOOL_RESPONSE } = %attrs.response_json,
        { MCPB_TOOL_OUTCOME } = %attrs.outcome,
    );

    // Enter and immediately exit the span (it's recorded)
    let _guard = span.enter();
}
