//! Shared fetch primitive used by every resolver

use std::time::Duration;

#[cfg(test)]
use mockall::automock;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::config::FetchConfig;
use crate::version::error::RegistryError;

/// Performs an HTTP GET and hands back the raw body
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches `url` and returns the response body as text, untransformed
    ///
    /// # Arguments
    /// * `url` - Endpoint to GET
    /// * `accept` - Media type sent in the `Accept` header (e.g., "application/vnd.github+json")
    ///
    /// # Returns
    /// * `Ok(String)` - The body of a successful response
    /// * `Err(RegistryError)` - Transport failure or a non-success status
    async fn get_url(&self, url: &str, accept: &str) -> Result<String, RegistryError>;
}

/// reqwest-backed fetcher
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn get_url(&self, url: &str, accept: &str) -> Result<String, RegistryError> {
        debug!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, accept)
            .send()
            .await?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(url.to_string()));
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(RegistryError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            warn!("Registry returned status {}: {}", status, url);
            return Err(RegistryError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
