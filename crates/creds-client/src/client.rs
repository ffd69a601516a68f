//! Dataset download client implementation.

use creds_core::{CredsError, Result};
use reqwest::Client as HttpClient;
use std::time::Duration;
use tracing::debug;

/// The published DefaultCreds cheat-sheet CSV.
pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/ihebski/DefaultCreds-cheat-sheet/main/DefaultCreds-Cheat-Sheet.csv";

/// Client for downloading the remote credential dataset.
#[derive(Debug, Clone)]
pub struct DatasetClient {
    http: HttpClient,
    url: String,
}

impl DatasetClient {
    /// Create a client with default settings.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a builder for custom configuration.
    #[must_use]
    pub fn builder() -> DatasetClientBuilder {
        DatasetClientBuilder::new()
    }

    /// URL this client downloads from.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Download the dataset body.
    ///
    /// Transport failures and non-success statuses abort without side
    /// effects; the caller decides what happens to any existing local
    /// dataset. There is one attempt per call, with no retry.
    pub async fn fetch(&self) -> Result<Vec<u8>> {
        debug!(url = %self.url, "downloading credential dataset");

        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| CredsError::Download(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CredsError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| CredsError::Download(e.to_string()))?;
        debug!(bytes = body.len(), "dataset downloaded");

        Ok(body.to_vec())
    }
}

/// Builder for configuring a [`DatasetClient`]
pub struct DatasetClientBuilder {
    url: String,
    user_agent: String,
    timeout: Option<Duration>,
    proxy: Option<String>,
}

impl DatasetClientBuilder {
    /// Create a builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            url: DEFAULT_DATASET_URL.to_string(),
            user_agent: format!("creds/{}", env!("CARGO_PKG_VERSION")),
            timeout: None,
            proxy: None,
        }
    }

    /// Set the dataset URL (useful for testing)
    #[must_use]
    pub fn dataset_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Set a total request timeout. Without one, downloads block until
    /// the remote endpoint answers or hangs up.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Route the download through an HTTP(S) proxy.
    #[must_use]
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Build the client.
    ///
    /// Fails when the proxy address does not parse or the TLS backend
    /// cannot be initialized.
    pub fn build(self) -> Result<DatasetClient> {
        let mut http = HttpClient::builder().user_agent(&self.user_agent).gzip(true);

        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }

        if let Some(proxy) = &self.proxy {
            let proxy =
                reqwest::Proxy::all(proxy).map_err(|e| CredsError::Client(e.to_string()))?;
            http = http.proxy(proxy);
        }

        let http = http
            .build()
            .map_err(|e| CredsError::Client(e.to_string()))?;

        Ok(DatasetClient {
            http,
            url: self.url,
        })
    }
}

impl Default for DatasetClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
