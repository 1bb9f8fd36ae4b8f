//! REST profile store speaking the PostgREST-style data API.

use std::time::Duration;

use async_trait::async_trait;

use autograder_core::config::provider::ProviderConfig;
use autograder_core::error::AppError;
use autograder_core::result::AppResult;
use autograder_entity::profile::NewProfile;

use super::ProfileStore;

/// Profile store backed by a PostgREST-style REST API.
#[derive(Debug, Clone)]
pub struct RestProfileStore {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestProfileStore {
    /// Create a store client from configuration.
    pub fn new(config: &ProviderConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| AppError::provider(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl ProfileStore for RestProfileStore {
    async fn insert(&self, profile: &NewProfile) -> AppResult<()> {
        let table = profile.table();
        let url = format!("{}/rest/v1/{}", self.base_url, table.as_str());

        let response = self
            .http
            .post(&url)
            .header("apikey", &self.api_key)
            .header("Prefer", "return=minimal")
            .json(&[profile])
            .send()
            .await
            .map_err(|e| AppError::profile_write(format!("Insert into {table} failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::profile_write(format!(
                "Insert into {table} rejected ({status}): {detail}"
            )));
        }

        Ok(())
    }
}
