//! Error types for productplan-api

/// Result type for ProductPlan API operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or calling the ProductPlan API
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No bearer token was supplied
    #[error("PRODUCTPLAN_API_TOKEN environment variable is required")]
    MissingToken,

    /// Base URL is not an http(s) URL
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    /// The API answered with a non-success status.
    ///
    /// `body` is the raw response text; error payloads are not always JSON.
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    /// Network or protocol failure below the HTTP status level
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// A success response whose body is not valid JSON
    #[error("invalid JSON in response: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
