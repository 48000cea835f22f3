//! MCP tool facade - bridges MCP tools to the MCPB Tool trait

use crate::binder::{self, BoundArguments};
use crate::bridge;
use crate::parameter::Parameter;
use crate::schema::{extract_parameters, schema_snapshot};
use crate::transport::ToolTransport;
use crate::types::McpToolInfo;
use async_trait::async_trait;
use mcpb_core::{Error, Result, Tool, ToolContext, ToolResponse};
use mcpb_telemetry::{ToolSpanAttributes, trace_tool_call};
use serde_json::{Map, Value};
use std::sync::Arc;
use uuid::Uuid;

/// A remote MCP tool exposed as a locally invokable unit.
///
/// The parameter list and schema snapshot are computed once from the tool
/// definition and never change afterwards; concurrent invocations share
/// them read-only.
pub struct McpTool {
    name: String,
    description: String,
    namespace: String,
    namespace_description: String,
    parameters: Arc<[Parameter]>,
    schema: Value,
    transport: Arc<dyn ToolTransport>,
}

impl McpTool {
    /// Create a tool from its remote definition.
    ///
    /// Fails with [`Error::MissingDefinition`] when there is no definition.
    pub fn new(definition: Option<McpToolInfo>, transport: Arc<dyn ToolTransport>) -> Result<Self> {
        let info = definition.ok_or(Error::MissingDefinition)?;

        let parameters: Arc<[Parameter]> = extract_parameters(&info.input_schema).into();
        let schema = schema_snapshot(&info.input_schema);

        tracing::debug!(
            tool = %info.name,
            parameters = parameters.len(),
            "Created MCP tool"
        );

        Ok(Self {
            name: info.name,
            description: info.description,
            namespace: String::new(),
            namespace_description: String::new(),
            parameters,
            schema,
            transport,
        })
    }

    /// Assign the caller's grouping
    pub fn with_namespace(
        mut self,
        namespace: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.namespace = namespace.into();
        self.namespace_description = description.into();
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn namespace_description(&self) -> &str {
        &self.namespace_description
    }

    /// `namespace.name`, or just `name` without a namespace
    pub fn full_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Normalized `{type: "object", properties}` schema for introspection
    pub fn describe_schema(&self) -> &Value {
        &self.schema
    }

    /// Bind caller arguments without invoking
    pub fn bind(&self, arguments: &Map<String, Value>) -> BoundArguments {
        binder::bind(&self.parameters, arguments)
    }

    /// Bind `arguments`, call the remote tool and return its parsed result.
    pub async fn invoke(&self, arguments: &Map<String, Value>) -> Result<Value> {
        let invocation_id = Uuid::new_v4().to_string();
        self.invoke_with_id(&invocation_id, arguments).await
    }

    async fn invoke_with_id(
        &self,
        invocation_id: &str,
        arguments: &Map<String, Value>,
    ) -> Result<Value> {
        let bound = self.bind(arguments);
        bridge::invoke(self.transport.as_ref(), &self.name, invocation_id, bound).await
    }
}

impl std::fmt::Debug for McpTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("McpTool")
            .field("name", &self.name)
            .field("namespace", &self.namespace)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Tool for McpTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn schema(&self) -> Value {
        self.schema.clone()
    }

    async fn execute(&self, ctx: Arc<dyn ToolContext>, params: Value) -> Result<ToolResponse> {
        tracing::debug!(
            invocation_id = %ctx.invocation_id(),
            tool = %self.name,
            "Executing MCP tool"
        );

        let arguments = match params {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                tracing::warn!(
                    tool = %self.name,
                    kind = %json_kind(&other),
                    "Tool parameters are not an object, binding without caller values"
                );
                Map::new()
            }
        };

        let result = self.invoke_with_id(ctx.invocation_id(), &arguments).await;
        let outcome = if result.is_ok() { "completed" } else { "failed" };

        trace_tool_call(ToolSpanAttributes {
            tool_name: self.name.clone(),
            tool_description: self.description.clone(),
            namespace: self.namespace.clone(),
            tool_call_id: ctx.function_call_id().to_string(),
            invocation_id: ctx.invocation_id().to_string(),
            args_json: Value::Object(arguments).to_string(),
            response_json: match &result {
                Ok(value) => value.to_string(),
                Err(e) => e.to_string(),
            },
            outcome: outcome.to_string(),
        });

        Ok(ToolResponse { result: result? })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
