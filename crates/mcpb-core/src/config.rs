//! Configuration management for MCPB
//!
//! Loads configuration with priority:
//! 1. Explicitly given file
//! 2. mcpb.toml in the current directory or one of its parents
//!
//! String values of the form `${VAR_NAME}` are replaced with the value of
//! the environment variable when it is set.

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "mcpb.toml";

/// MCPB configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct McpbConfig {
    /// MCP servers whose tools are imported
    #[serde(default)]
    pub servers: Vec<ServerConfig>,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// One MCP server and the namespace its tools are stored under
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Namespace assigned to every tool of this server (may be empty)
    #[serde(default)]
    pub namespace: String,

    /// Namespace description, resolved once when the toolset is built
    #[serde(default)]
    pub description: String,

    /// Command to spawn for a stdio server
    pub command: Option<String>,

    #[serde(default)]
    pub args: Vec<String>,

    #[serde(default)]
    pub env: HashMap<String, String>,

    /// Endpoint of a streamable HTTP server
    pub url: Option<String>,

    /// Only import tools with these names
    pub tools: Option<Vec<String>>,
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    pub service_name: Option<String>,

    /// Filter directive used when RUST_LOG is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: None,
            log_filter: default_log_filter(),
        }
    }
}

impl McpbConfig {
    /// Load configuration from mcpb.toml, searching the current directory and
    /// its parents
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            Self::find_config_file()?
        };

        tracing::debug!("Loading configuration from: {:?}", config_path);

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to load config file: {:?}", config_path))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let mut config: McpbConfig = toml::from_str(contents).context("Invalid TOML")?;
        config.resolve_env_vars()?;
        config.validate()?;
        Ok(config)
    }

    /// Find mcpb.toml by searching current directory and parents
    fn find_config_file() -> Result<PathBuf> {
        let mut current = env::current_dir()?;

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Ok(config_path);
            }

            if !current.pop() {
                break;
            }
        }

        Err(anyhow!("{} not found", CONFIG_FILE_NAME))
    }

    fn validate(&self) -> Result<()> {
        for server in &self.servers {
            match (&server.command, &server.url) {
                (Some(_), Some(_)) => {
                    return Err(anyhow!(
                        "Server '{}' sets both command and url",
                        server.namespace
                    ));
                }
                (None, None) => {
                    return Err(anyhow!(
                        "Server '{}' needs either a command or a url",
                        server.namespace
                    ));
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Resolve ${VAR_NAME} references to environment variables.
    ///
    /// Unset variables in `command` or `url` are errors; in `args` and `env`
    /// the reference is kept as written.
    fn resolve_env_vars(&mut self) -> Result<()> {
        for server in &mut self.servers {
            if let Some(url) = server.url.as_mut() {
                *url = Self::resolve_endpoint(url, "url", &server.namespace)?;
            }
            if let Some(command) = server.command.as_mut() {
                *command = Self::resolve_endpoint(command, "command", &server.namespace)?;
            }
            for value in server.args.iter_mut().chain(server.env.values_mut()) {
                if let Some(resolved) = Self::resolve_env_var(value) {
                    *value = resolved;
                }
            }
        }
        Ok(())
    }

    fn resolve_endpoint(value: &str, field: &str, namespace: &str) -> Result<String> {
        Self::resolve_env_var(value).ok_or_else(|| {
            anyhow!(
                "Server '{}' {} references an unset variable: {}",
                namespace,
                field,
                value
            )
        })
    }

    /// Resolve a single ${VAR_NAME} reference
    pub fn resolve_env_var(value: &str) -> Option<String> {
        if value.starts_with("${") && value.ends_with('}') {
            let var_name = &value[2..value.len() - 1];
            env::var(var_name).ok()
        } else {
            Some(value.to_string())
        }
    }
}

fn default_log_filter() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
[[servers]]
namespace = "files"
description = "Local file access"
command = "mcp-files"
args = ["--root", "/tmp"]

[[servers]]
namespace = "search"
url = "http://localhost:8000/mcp"
tools = ["web_search"]

[observability]
service_name = "bridge"
"#;

    #[test]
    fn test_parse_servers() {
        let config = McpbConfig::from_toml(SAMPLE).unwrap();
        assert_eq!(config.servers.len(), 2);
        assert_eq!(config.servers[0].command.as_deref(), Some("mcp-files"));
        assert_eq!(config.servers[0].args, vec!["--root", "/tmp"]);
        assert_eq!(
            config.servers[1].tools,
            Some(vec!["web_search".to_string()])
        );
        assert_eq!(config.observability.service_name.as_deref(), Some("bridge"));
        assert_eq!(config.observability.log_filter, "info");
    }

    #[test]
    fn test_server_needs_endpoint() {
        let err = McpbConfig::from_toml("[[servers]]\nnamespace = \"x\"\n").unwrap_err();
        assert!(err.to_string().contains("either a command or a url"));
    }

    #[test]
    fn test_server_rejects_two_endpoints() {
        let toml = "[[servers]]\nnamespace = \"x\"\ncommand = \"a\"\nurl = \"http://b\"\n";
        assert!(McpbConfig::from_toml(toml).is_err());
    }

    #[test]
    fn test_resolve_env_var() {
        unsafe {
            env::set_var("MCPB_TEST_VAR", "test_value");
        }

        let resolved = McpbConfig::resolve_env_var("${MCPB_TEST_VAR}");
        assert_eq!(resolved, Some("test_value".to_string()));

        let not_var = McpbConfig::resolve_env_var("plain_value");
        assert_eq!(not_var, Some("plain_value".to_string()));

        unsafe {
            env::remove_var("MCPB_TEST_VAR");
        }
    }

    #[test]
    fn test_args_env_reference() {
        unsafe {
            env::set_var("MCPB_TEST_ROOT", "/srv/data");
        }

        let config = McpbConfig::from_toml(
            "[[servers]]\ncommand = \"mcp-files\"\nargs = [\"--root\", \"${MCPB_TEST_ROOT}\", \"${MCPB_TEST_UNSET_ARG}\"]\n",
        )
        .unwrap();
        assert_eq!(
            config.servers[0].args,
            vec!["--root", "/srv/data", "${MCPB_TEST_UNSET_ARG}"]
        );

        unsafe {
            env::remove_var("MCPB_TEST_ROOT");
        }
    }

    #[test]
    fn test_unset_command_variable_is_error() {
        let err = McpbConfig::from_toml(
            "[[servers]]\nnamespace = \"files\"\ncommand = \"${MCPB_TEST_UNSET_COMMAND}\"\n",
        )
        .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("files"));
        assert!(message.contains("${MCPB_TEST_UNSET_COMMAND}"));

        assert!(McpbConfig::from_toml("[[servers]]\nurl = \"${MCPB_TEST_UNSET_URL}\"\n").is_err());
    }

    #[test]
    fn test_url_env_reference() {
        unsafe {
            env::set_var("MCPB_TEST_URL", "http://example.test/mcp");
        }

        let config =
            McpbConfig::from_toml("[[servers]]\nurl = \"${MCPB_TEST_URL}\"\n").unwrap();
        assert_eq!(
            config.servers[0].url.as_deref(),
            Some("http://example.test/mcp")
        );

        unsafe {
            env::remove_var("MCPB_TEST_URL");
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = McpbConfig::load_from(Some(file.path())).unwrap();
        assert_eq!(config.servers[0].namespace, "files");
    }
}
