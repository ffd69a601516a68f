//! Command implementations and shared execution context.

pub mod search;
pub mod update;

use anyhow::Result;
use creds_client::DatasetClient;
use creds_core::store::DatasetStore;

use crate::config::Settings;

/// State shared by every command, built once in [`crate::cli::run`].
pub struct Context {
    /// Resolved storage location and dataset URL
    pub settings: Settings,
}

impl Context {
    /// Create a dataset client, optionally routed through a proxy.
    pub fn client(&self, proxy: Option<&str>) -> Result<DatasetClient> {
        let mut builder = DatasetClient::builder().dataset_url(&self.settings.dataset_url);

        if let Some(proxy) = proxy {
            builder = builder.proxy(proxy);
        }

        Ok(builder.build()?)
    }

    /// Handle to the persisted dataset file.
    #[must_use]
    pub fn store(&self) -> DatasetStore {
        DatasetStore::new(&self.settings.storage_dir)
    }
}
