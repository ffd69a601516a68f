//! The locally persisted credential database.

use crate::{Credential, CredsError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the persisted dataset inside the storage directory.
pub const DATABASE_FILE_NAME: &str = "credential_database.json";

/// Handle to the dataset file under a resolved storage directory.
///
/// The file is never mutated in place: every update deletes and recreates
/// it wholesale, and every read loads the whole document.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    path: PathBuf,
}

impl DatasetStore {
    /// Create a store for `dir`/`credential_database.json`.
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(DATABASE_FILE_NAME),
        }
    }

    /// Path of the dataset file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when the dataset file is absent, unreadable, or zero-length.
    #[must_use]
    pub fn is_missing_or_empty(&self) -> bool {
        match fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        }
    }

    /// Load the full record sequence from disk.
    pub fn load(&self) -> Result<Vec<Credential>> {
        let raw = fs::read_to_string(&self.path).map_err(CredsError::DatabaseRead)?;
        serde_json::from_str(&raw).map_err(CredsError::DatabaseParse)
    }

    /// Replace the dataset file with `records`, serialized as one JSON array.
    ///
    /// Deletes any existing file first; a missing file is not an error.
    pub fn replace(&self, records: &[Credential]) -> Result<()> {
        let _ = fs::remove_file(&self.path);

        let file = fs::File::create(&self.path).map_err(CredsError::DatabaseCreate)?;
        serde_json::to_writer(file, records).map_err(CredsError::DatabaseWrite)?;

        debug!(
            path = %self.path.display(),
            count = records.len(),
            "credential database written"
        );
        Ok(())
    }
}
