//! ProductPlan REST API client
//!
//! A deliberately small client for `https://app.productplan.com/api/v2`.
//! Every call is a single HTTP request: no retries, caching or pagination.
//!
//! ```ignore
//! use productplan_api::{ApiClient, Config, Method};
//!
//! let client = ApiClient::new(Config::from_env()?);
//! let roadmaps = client.request(Method::GET, "/roadmaps", None).await?;
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::ApiClient;
pub use config::{API_BASE_ENV, Config, DEFAULT_API_BASE, TOKEN_ENV};
pub use error::{Error, Result};
pub use reqwest::Method;
