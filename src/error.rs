//! Top-level error types
//!
//! Per-invocation failures live in [`crate::tools::ToolError`] and are
//! reported to the client as failed tool results. The errors here end the
//! process.

use thiserror::Error;

/// Process-level error
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Tool error: {0}")]
    Tool(#[from] crate::tools::ToolError),

    #[error("Client disconnected: {0}")]
    Disconnected(String),

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// Create transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Whether the client went away before the session started
    pub fn is_disconnect(&self) -> bool {
        matches!(self, ServerError::Disconnected(_))
    }

    /// Plain `ERROR: ...` line written to stderr before a fatal exit
    pub fn diagnostic(&self) -> String {
        match self {
            ServerError::Config(inner) => format!("ERROR: {inner}"),
            other => format!("ERROR: {other}"),
        }
    }
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;
