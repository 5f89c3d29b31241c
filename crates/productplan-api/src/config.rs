//! Client configuration
//!
//! The credential is read once at startup and carried in a [`Config`] value,
//! so nothing downstream touches the process environment.

use std::fmt;

use crate::{Error, Result};

/// Production API root
pub const DEFAULT_API_BASE: &str = "https://app.productplan.com/api/v2";

/// Environment variable holding the bearer token
pub const TOKEN_ENV: &str = "PRODUCTPLAN_API_TOKEN";

/// Environment variable overriding [`DEFAULT_API_BASE`]
pub const API_BASE_ENV: &str = "PRODUCTPLAN_API_BASE";

/// Credentials and endpoint for the ProductPlan API
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    api_token: String,
    base_url: String,
}

impl Config {
    /// Create a configuration against the production API.
    ///
    /// Fails with [`Error::MissingToken`] if the token is empty.
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        let api_token = api_token.into();
        if api_token.trim().is_empty() {
            return Err(Error::MissingToken);
        }
        Ok(Self {
            api_token,
            base_url: DEFAULT_API_BASE.to_string(),
        })
    }

    /// Point the client at a different API root (staging, a mock server).
    ///
    /// A single trailing slash is dropped so that paths can always start with `/`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self> {
        let mut base_url = base_url.into();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::InvalidBaseUrl(base_url));
        }
        if base_url.ends_with('/') {
            base_url.pop();
        }
        self.base_url = base_url;
        Ok(self)
    }

    /// Build a configuration from a variable lookup function.
    ///
    /// `lookup` receives [`TOKEN_ENV`] and [`API_BASE_ENV`]. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(TOKEN_ENV).ok_or(Error::MissingToken)?;
        let config = Self::new(token)?;

        match lookup(API_BASE_ENV).filter(|base| !base.trim().is_empty()) {
            Some(base) => config.with_base_url(base),
            None => Ok(config),
        }
    }

    /// Build a configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
