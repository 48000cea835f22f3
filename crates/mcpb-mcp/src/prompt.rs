//! Namespace description resolution.

use std::collections::HashMap;
use std::env;

/// Resolves a namespace description before it is attached to tools.
///
/// Applied once per toolset build.
pub trait PromptResolver: Send + Sync {
    fn resolve(&self, text: &str) -> String;
}

/// Leaves the text unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughResolver;

impl PromptResolver for PassthroughResolver {
    fn resolve(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Expands `${NAME}` placeholders.
///
/// Explicit variables take precedence over the process environment.
/// Placeholders that resolve to nothing are kept verbatim.
#[derive(Debug, Clone, Default)]
pub struct EnvPromptResolver {
    vars: HashMap<String, String>,
}

impl EnvPromptResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    fn lookup(&self, name: &str) -> Option<String> {
        self.vars
            .get(name)
            .cloned()
            .or_else(|| env::var(name).ok())
    }
}

impl PromptResolver for EnvPromptResolver {
    fn resolve(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(start) = rest.find("${") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];

            let Some(end) = after.find('}') else {
                // unterminated
                out.push_str(&rest[start..]);
                return out;
            };

            let name = &after[..end];
            match self.lookup(name) {
                Some(value) => out.push_str(&value),
                None => out.push_str(&rest[start..start + end + 3]),
            }
            rest = &after[end + 1..];
        }

        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough() {
        assert_eq!(PassthroughResolver.resolve("Tools for ${X}"), "Tools for ${X}");
    }

    #[test]
    fn test_expands_explicit_vars() {
        let resolver = EnvPromptResolver::new()
            .var("PRODUCT", "Acme")
            .var("REGION", "eu");

        assert_eq!(
            resolver.resolve("${PRODUCT} tools (${REGION})"),
            "Acme tools (eu)"
        );
    }

    #[test]
    fn test_unknown_placeholder_kept() {
        let resolver = EnvPromptResolver::new();
        assert_eq!(
            resolver.resolve("use ${MCPB_SURELY_UNSET_VAR} here"),
            "use ${MCPB_SURELY_UNSET_VAR} here"
        );
    }

    #[test]
    fn test_unterminated_placeholder() {
        let resolver = EnvPromptResolver::new().var("A", "x");
        assert_eq!(resolver.resolve("${A} and ${B"), "x and ${B");
    }

    #[test]
    fn test_reads_environment() {
        unsafe {
            env::set_var("MCPB_PROMPT_TEST", "from env");
        }

        assert_eq!(
            EnvPromptResolver::new().resolve("[${MCPB_PROMPT_TEST}]"),
            "[from env]"
        );

        unsafe {
            env::remove_var("MCPB_PROMPT_TEST");
        }
    }
}
