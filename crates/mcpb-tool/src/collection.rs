//! Keyed tool collection.

use indexmap::IndexMap;
use mcpb_core::Tool;
use std::sync::Arc;

/// Tools stored under caller-assigned qualified names.
///
/// Insertion order is kept. Adding a tool under an existing key replaces the
/// previous entry in place.
pub struct ToolCollection<T: ?Sized = dyn Tool> {
    entries: IndexMap<String, Arc<T>>,
}

impl<T: ?Sized> ToolCollection<T> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Store a tool under `key`.
    pub fn add(&mut self, key: impl Into<String>, tool: Arc<T>) {
        let key = key.into();
        if self.entries.contains_key(&key) {
            tracing::warn!(key = %key, "Replacing tool with duplicate name");
        }
        self.entries.insert(key, tool);
    }

    pub fn get(&self, key: &str) -> Option<Arc<T>> {
        self.entries.get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<T>)> {
        self.entries.iter().map(|(k, tool)| (k.as_str(), tool))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Tool + 'static> ToolCollection<T> {
    /// Erase the concrete tool type, e.g. to hand the tools to an agent.
    pub fn to_dyn(&self) -> Vec<Arc<dyn Tool>> {
        self.entries
            .values()
            .map(|tool| tool.clone() as Arc<dyn Tool>)
            .collect()
    }
}

impl<T: ?Sized> Default for ToolCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for ToolCollection<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mcpb_core::{Result, ToolContext, ToolResponse};
    use serde_json::{Value, json};

    struct NamedTool(&'static str);

    #[async_trait]
    impl Tool for NamedTool {
        fn name(&self) -> &str {
            self.0
        }

        fn description(&self) -> &str {
            "test tool"
        }

        fn schema(&self) -> Value {
            json!({"type": "object"})
        }

        async fn execute(&self, _ctx: Arc<dyn ToolContext>, _params: Value) -> Result<ToolResponse> {
            Ok(ToolResponse {
                result: json!(self.0),
            })
        }
    }

    #[test]
    fn test_add_and_get() {
        let mut tools: ToolCollection = ToolCollection::new();
        tools.add("fs.read", Arc::new(NamedTool("read")));
        tools.add("fs.write", Arc::new(NamedTool("write")));

        assert_eq!(tools.len(), 2);
        assert_eq!(tools.get("fs.write").unwrap().name(), "write");
        assert!(tools.get("write").is_none());
        assert_eq!(tools.keys().collect::<Vec<_>>(), vec!["fs.read", "fs.write"]);
    }

    #[test]
    fn test_duplicate_key_replaces() {
        let mut tools: ToolCollection<NamedTool> = ToolCollection::new();
        tools.add("echo", Arc::new(NamedTool("first")));
        tools.add("echo", Arc::new(NamedTool("second")));

        assert_eq!(tools.len(), 1);
        assert_eq!(tools.get("echo").unwrap().name(), "second");
    }

    #[test]
    fn test_replacement_keeps_position() {
        let mut tools: ToolCollection<NamedTool> = ToolCollection::new();
        tools.add("a", Arc::new(NamedTool("a1")));
        tools.add("b", Arc::new(NamedTool("b")));
        tools.add("a", Arc::new(NamedTool("a2")));

        assert!(tools.contains("a"));
        assert_eq!(tools.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        let names: Vec<_> = tools.iter().map(|(_, tool)| tool.name()).collect();
        assert_eq!(names, vec!["a2", "b"]);
    }

    #[test]
    fn test_to_dyn() {
        let mut tools: ToolCollection<NamedTool> = ToolCollection::default();
        assert!(tools.is_empty());
        tools.add("a", Arc::new(NamedTool("a")));

        let erased = tools.to_dyn();
        assert_eq!(erased.len(), 1);
        assert_eq!(erased[0].name(), "a");
    }
}
