//! Station dataset fetched over HTTP.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::StationTable;

use super::error::StationError;
use super::record::parse_table;
use super::source::StationSource;

/// Configuration for the dataset HTTP client.
#[derive(Debug, Clone)]
pub struct StationClientConfig {
    /// URL returning a JSON array of station records
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl StationClientConfig {
    /// Create a new config for the given dataset URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: 30,
        }
    }

    /// Set a custom request timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Client that downloads the station dataset.
#[derive(Debug, Clone)]
pub struct StationClient {
    http: reqwest::Client,
    url: String,
}

impl StationClient {
    /// Create a new dataset client.
    pub fn new(config: StationClientConfig) -> Result<Self, StationError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }

    /// The dataset URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and parse the full dataset.
    pub async fn fetch_all(&self) -> Result<StationTable, StationError> {
        let response = self.http.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StationError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        parse_table(&body)
    }
}

#[async_trait]
impl StationSource for StationClient {
    async fn load(&self) -> Result<Arc<StationTable>, StationError> {
        let table = self.fetch_all().await?;
        tracing::debug!(url = %self.url, stations = table.len(), "fetched station dataset");
        Ok(Arc::new(table))
    }
}
