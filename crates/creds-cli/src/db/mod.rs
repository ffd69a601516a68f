//! Database refresh and ensure orchestration.
//!
//! `refresh` is the updater: fetch, parse, replace. `ensure` guarantees a
//! non-empty database file exists before a read, refreshing best-effort
//! when it does not.

use creds_client::DatasetClient;
use creds_core::store::DatasetStore;
use creds_core::{parse, CredsError};
use tracing::{error, info};

/// What [`ensure`] did about the database file.
///
/// A failed refresh is part of the contract rather than an error: callers
/// continue to the read path, which surfaces its own failure if nothing
/// usable is on disk.
#[derive(Debug)]
pub enum EnsureOutcome {
    /// A non-empty database file was already present; nothing was fetched
    Present,

    /// The file was missing or empty and a refresh succeeded
    Refreshed,

    /// The file was missing or empty and the refresh failed; the error is
    /// recorded but not propagated
    RefreshFailed(CredsError),
}

impl EnsureOutcome {
    /// True unless a refresh was attempted and failed
    #[must_use]
    pub const fn is_usable(&self) -> bool {
        !matches!(self, Self::RefreshFailed(_))
    }
}

/// Re-fetch the remote dataset and rebuild the local database.
///
/// Transport, status, and CSV errors abort before the existing file is
/// touched. Persistence errors are logged and do not fail the update.
pub async fn refresh(client: &DatasetClient, store: &DatasetStore) -> creds_core::Result<()> {
    info!("updating database");

    let body = client.fetch().await?;
    let records = parse::parse_dataset(&body)?;

    if let Err(e) = store.replace(&records) {
        error!(error = %e, "database file could not be rewritten");
        return Ok(());
    }

    info!(count = records.len(), "database updated");
    Ok(())
}

/// Make sure a non-empty database file exists, refreshing if it does not.
pub async fn ensure(client: &DatasetClient, store: &DatasetStore) -> EnsureOutcome {
    if !store.is_missing_or_empty() {
        return EnsureOutcome::Present;
    }

    match refresh(client, store).await {
        Ok(()) => EnsureOutcome::Refreshed,
        Err(e) => EnsureOutcome::RefreshFailed(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use creds_core::Credential;
    use tempfile::TempDir;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const CSV_BODY: &str =
        "Product Vendor,Username,Password\nAcme,admin,admin\nCisco,cisco,cisco\n";

    async fn mock_dataset(expected_requests: u64) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(CSV_BODY))
            .expect(expected_requests)
            .mount(&server)
            .await;
        server
    }

    fn client_for(server: &MockServer) -> DatasetClient {
        DatasetClient::builder()
            .dataset_url(server.uri())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn ensure_refreshes_exactly_once_when_the_file_is_missing() {
        let dir = TempDir::new().unwrap();
        let store = DatasetStore::new(dir.path());
        let server = mock_dataset(1).await;

        let outcome = ensure(&client_for(&server), &store).await;
        assert!(matches!(outcome, EnsureOutcome::Refreshed));

        let records = store.load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], Credential::new("Acme", "admin", "admin"));
    }

    #[tokio::test]
    async fn ensure_skips_the_fetch_when_the_file_is_healthy() {
        let dir = TempDir::new().unwrap();
        let store = DatasetStore::new(dir.path());
        store
            .replace(&[Credential::new("Acme", "admin", "admin")])
            .unwrap();

        let server = mock_dataset(0).await;
        let outcome = ensure(&client_for(&server), &store).await;
        assert!(matches!(outcome, EnsureOutcome::Present));
        assert!(outcome.is_usable());
    }

    #[tokio::test]
    async fn ensure_records_a_failed_refresh_without_touching_disk() {
        let dir = TempDir::new().unwrap();
        let store = DatasetStore::new(dir.path());

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let outcome = ensure(&client_for(&server), &store).await;
        assert!(matches!(
            outcome,
            EnsureOutcome::RefreshFailed(CredsError::Status(500))
        ));
        assert!(!outcome.is_usable());
        assert!(store.is_missing_or_empty());
    }

    #[tokio::test]
    async fn refresh_leaves_the_existing_file_alone_on_fetch_failure() {
        let dir = TempDir::new().unwrap();
        let store = DatasetStore::new(dir.path());
        let seeded = vec![Credential::new("Acme", "admin", "admin")];
        store.replace(&seeded).unwrap();

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = refresh(&client_for(&server), &store).await.unwrap_err();
        assert!(matches!(err, CredsError::Status(404)));
        assert_eq!(store.load().unwrap(), seeded);
    }

    #[tokio::test]
    async fn refresh_drops_malformed_rows_but_keeps_the_rest() {
        let dir = TempDir::new().unwrap();
        let store = DatasetStore::new(dir.path());

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                "Product Vendor,Username,Password\nAcme,admin,admin\nbroken,row\nZyxel,zyadmin,1234\n",
            ))
            .mount(&server)
            .await;

        refresh(&client_for(&server), &store).await.unwrap();
        let records = store.load().unwrap();
        assert_eq!(
            records,
            vec![
                Credential::new("Acme", "admin", "admin"),
                Credential::new("Zyxel", "zyadmin", "1234"),
            ]
        );
    }

    #[tokio::test]
    async fn refresh_reports_success_even_when_persistence_fails() {
        let server = mock_dataset(1).await;
        // a store rooted in a directory that does not exist cannot be written
        let store = DatasetStore::new("/nonexistent/creds-refresh-test");

        refresh(&client_for(&server), &store).await.unwrap();
        assert!(store.is_missing_or_empty());
    }

    #[tokio::test]
    async fn two_refreshes_of_an_unchanged_remote_are_byte_identical() {
        let dir = TempDir::new().unwrap();
        let store = DatasetStore::new(dir.path());
        let server = mock_dataset(2).await;
        let client = client_for(&server);

        refresh(&client, &store).await.unwrap();
        let first = std::fs::read(store.path()).unwrap();

        refresh(&client, &store).await.unwrap();
        let second = std::fs::read(store.path()).unwrap();

        assert_eq!(first, second);
    }
}
