//! Error types for the MCP server

use thiserror::Error;

/// Result type alias for MCP operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during MCP server operations
#[derive(Debug, Error)]
pub enum Error {
    /// Error from the ProductPlan API client
    #[error(transparent)]
    Api(#[from] productplan_api::Error),

    /// Error during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid tool arguments
    #[error("invalid arguments: {message}")]
    InvalidArguments { message: String },

    /// Unknown tool requested
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_arguments(message: impl Into<String>) -> Self {
        Error::InvalidArguments {
            message: message.into(),
        }
    }
}
