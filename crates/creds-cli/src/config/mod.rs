//! Settings resolution: storage location and dataset source.

use anyhow::{Context as _, Result};
use creds_client::DEFAULT_DATASET_URL;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Environment override for the storage directory (used by tests).
const CONFIG_DIR_ENV: &str = "CREDS_CONFIG_DIR";

/// Environment override for the dataset URL (used by tests).
const DATASET_URL_ENV: &str = "CREDS_DATASET_URL";

/// Per-invocation settings, resolved once at startup and passed to every
/// component that needs them.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory holding the credential database file
    pub storage_dir: PathBuf,

    /// URL the updater downloads the CSV dataset from
    pub dataset_url: String,
}

impl Settings {
    /// Resolve settings from the environment.
    ///
    /// The storage directory defaults to the per-user config directory
    /// (`~/.config/creds` on Linux); failing to determine one is fatal.
    pub fn resolve() -> Result<Self> {
        let storage_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => ProjectDirs::from("", "", "creds")
                .ok_or_else(|| anyhow::anyhow!("could not retrieve config directory"))?
                .config_dir()
                .to_path_buf(),
        };

        let dataset_url =
            std::env::var(DATASET_URL_ENV).unwrap_or_else(|_| DEFAULT_DATASET_URL.to_string());

        Ok(Self {
            storage_dir,
            dataset_url,
        })
    }

    /// Create the storage directory if needed, owner-only on Unix.
    pub fn ensure_storage_dir(&self) -> Result<()> {
        if self.storage_dir.is_dir() {
            return Ok(());
        }

        create_private_dir(&self.storage_dir)
            .with_context(|| format!("could not create {}", self.storage_dir.display()))
    }
}

#[cfg(unix)]
fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    std::fs::DirBuilder::new()
        .recursive(true)
        .mode(0o700)
        .create(dir)
}

#[cfg(not(unix))]
fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn ensure_creates_the_storage_directory() {
        let root = TempDir::new().unwrap();
        let settings = Settings {
            storage_dir: root.path().join("creds"),
            dataset_url: DEFAULT_DATASET_URL.to_string(),
        };

        settings.ensure_storage_dir().unwrap();
        assert!(settings.storage_dir.is_dir());
    }

    #[test]
    fn ensure_is_a_no_op_for_an_existing_directory() {
        let root = TempDir::new().unwrap();
        let settings = Settings {
            storage_dir: root.path().to_path_buf(),
            dataset_url: DEFAULT_DATASET_URL.to_string(),
        };

        settings.ensure_storage_dir().unwrap();
        settings.ensure_storage_dir().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn storage_directory_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let root = TempDir::new().unwrap();
        let settings = Settings {
            storage_dir: root.path().join("creds"),
            dataset_url: DEFAULT_DATASET_URL.to_string(),
        };

        settings.ensure_storage_dir().unwrap();
        let mode = std::fs::metadata(&settings.storage_dir)
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o700);
    }
}
