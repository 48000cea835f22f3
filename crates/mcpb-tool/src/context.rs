use mcpb_core::ToolContext;
use uuid::Uuid;

/// Default implementation of ToolContext
#[derive(Debug, Clone)]
pub struct DefaultToolContext {
    function_call_id: String,
    invocation_id: String,
}

impl DefaultToolContext {
    pub fn new(function_call_id: String, invocation_id: String) -> Self {
        Self {
            function_call_id,
            invocation_id,
        }
    }

    /// Context with freshly generated ids, for calls made outside an agent run
    pub fn generate() -> Self {
        Self::new(Uuid::new_v4().to_string(), Uuid::new_v4().to_string())
    }
}

impl ToolContext for DefaultToolContext {
    fn function_call_id(&self) -> &str {
        &self.function_call_id
    }

    fn invocation_id(&self) -> &str {
        &self.invocation_id
    }
}
