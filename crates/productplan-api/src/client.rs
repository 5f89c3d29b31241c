//! HTTP call helper
//!
//! One generic request function with uniform error translation. Callers pass
//! a method, a path below the API root and an optional JSON body.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde_json::{Value, json};

use crate::{Config, Error, Result};

/// Client for the ProductPlan REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Config,
}

impl ApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Full URL for a path such as `/roadmaps/42`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    /// Perform a single request and return the parsed JSON body.
    ///
    /// Non-success statuses become [`Error::Api`] carrying the raw body text.
    /// A `204 No Content` response yields `{"success": true}`; any other
    /// success body must be JSON.
    pub async fn request(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value> {
        let url = self.url(path);
        tracing::debug!(%method, %url, has_body = body.is_some(), "Sending ProductPlan request");

        let mut request = self
            .http
            .request(method.clone(), &url)
            .bearer_auth(self.config.api_token())
            .header(CONTENT_TYPE, "application/json");

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            tracing::warn!(%method, %url, status = status.as_u16(), "ProductPlan API returned an error");
            return Err(Error::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(json!({ "success": true }));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
