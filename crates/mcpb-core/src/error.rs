use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A tool was constructed without a backing definition
    #[error("Tool definition is missing")]
    MissingDefinition,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Tool '{tool}' invocation failed: {source}")]
    Invocation {
        tool: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Tool '{tool}' returned a result that could not be parsed: {source}")]
    ResultParse {
        tool: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Helper for creating configuration errors
    ///
    /// # Example
    /// ```
    /// use mcpb_core::Error;
    /// let err = Error::config_error("Server entry needs a command or a url");
    /// ```
    pub fn config_error(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Helper for creating transport errors
    pub fn transport_error(msg: impl Into<String>) -> Self {
        Error::Transport(msg.into())
    }

    /// Helper for wrapping a remote failure of the named tool
    ///
    /// # Example
    /// ```
    /// use mcpb_core::Error;
    /// let err = Error::invocation("search", anyhow::anyhow!("connection reset"));
    /// assert!(err.to_string().contains("search"));
    /// ```
    pub fn invocation(tool: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Error::Invocation {
            tool: tool.into(),
            source: source.into(),
        }
    }

    /// Helper for creating general errors with a message
    pub fn message(msg: impl Into<String>) -> Self {
        Error::Other(anyhow::anyhow!("{}", msg.into()))
    }
}
