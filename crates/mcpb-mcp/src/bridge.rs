//! Invocation bridge: bound arguments in, normalized JSON out.

use crate::binder::BoundArguments;
use crate::transport::ToolTransport;
use crate::types::ToolOutput;
use mcpb_core::{Error, Result};
use serde_json::Value;
use tracing::{Instrument, debug, field, warn};

/// Lifecycle of a single invocation.
///
/// `Binding -> Invoking -> Completed | Failed`. There is no retry edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationState {
    Binding,
    Invoking,
    Completed,
    Failed,
}

impl InvocationState {
    pub fn is_terminal(self) -> bool {
        matches!(self, InvocationState::Completed | InvocationState::Failed)
    }
}

impl std::fmt::Display for InvocationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvocationState::Binding => write!(f, "binding"),
            InvocationState::Invoking => write!(f, "invoking"),
            InvocationState::Completed => write!(f, "completed"),
            InvocationState::Failed => write!(f, "failed"),
        }
    }
}

/// Send `arguments` to `tool` through `transport` and normalize the result.
///
/// Transport errors surface as [`Error::Invocation`], unparseable text as
/// [`Error::ResultParse`].
pub async fn invoke(
    transport: &dyn ToolTransport,
    tool: &str,
    invocation_id: &str,
    arguments: BoundArguments,
) -> Result<Value> {
    let span = tracing::debug_span!(
        "mcp_invocation",
        tool = %tool,
        invocation_id = %invocation_id,
        state = %InvocationState::Binding,
        error = field::Empty,
    );

    async move {
        let missing: Vec<&str> = arguments.missing().collect();
        if !missing.is_empty() {
            debug!(?missing, "Invoking with required arguments missing");
        }

        let call_arguments = arguments.into_call_arguments();
        tracing::Span::current().record("state", field::display(InvocationState::Invoking));
        debug!(argument_count = call_arguments.len(), "Calling remote tool");

        let outcome = match transport.call_tool(tool, call_arguments).await {
            Ok(output) => normalize(tool, output),
            Err(e) => Err(into_invocation_error(tool, e)),
        };

        let span = tracing::Span::current();
        match &outcome {
            Ok(_) => {
                span.record("state", field::display(InvocationState::Completed));
                debug!("Remote tool call completed");
            }
            Err(e) => {
                span.record("state", field::display(InvocationState::Failed));
                span.record("error", field::display(e));
                warn!(error = %e, "Remote tool call failed");
            }
        }

        outcome
    }
    .instrument(span)
    .await
}

/// Turn raw tool output into a JSON value. Text must parse as JSON.
pub fn normalize(tool: &str, output: ToolOutput) -> Result<Value> {
    match output {
        ToolOutput::Structured(value) => Ok(value),
        ToolOutput::Text(text) => {
            serde_json::from_str(&text).map_err(|source| Error::ResultParse {
                tool: tool.to_string(),
                source,
            })
        }
    }
}

fn into_invocation_error(tool: &str, error: Error) -> Error {
    match error {
        Error::Invocation { .. } => error,
        other => Error::invocation(tool, other),
    }
}
