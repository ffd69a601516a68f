use thiserror::Error;

/// Result type alias for creds operations
pub type Result<T> = std::result::Result<T, CredsError>;

/// Errors that can occur while refreshing or querying the credential database
#[derive(Error, Debug)]
pub enum CredsError {
    /// HTTP transport failure while downloading the dataset
    #[error("could not download database: {0}")]
    Download(String),

    /// Remote endpoint answered with a non-success status
    #[error("download failed with HTTP status {0}")]
    Status(u16),

    /// Response body was not a readable CSV document
    #[error("could not read response body: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid proxy address or TLS setup
    #[error("could not build HTTP client: {0}")]
    Client(String),

    /// The persisted database file could not be read
    #[error("could not read database: {0}")]
    DatabaseRead(#[source] std::io::Error),

    /// The persisted database was not a valid JSON array of records
    #[error("could not parse database: {0}")]
    DatabaseParse(#[source] serde_json::Error),

    /// The database file could not be created
    #[error("could not create database file: {0}")]
    DatabaseCreate(#[source] std::io::Error),

    /// The record sequence could not be serialized into the database file
    #[error("could not write credential database: {0}")]
    DatabaseWrite(#[source] serde_json::Error),

    /// An export file could not be written
    #[error("could not write export file: {0}")]
    Export(#[source] std::io::Error),

    /// A matched record set could not be serialized for output
    #[error("could not parse search result")]
    ResultEncoding,
}

impl CredsError {
    /// Returns true if the error aborts a refresh before the persisted
    /// file is touched
    #[must_use]
    pub const fn is_refresh_abort(&self) -> bool {
        matches!(
            self,
            Self::Download(_) | Self::Status(_) | Self::Csv(_) | Self::Client(_)
        )
    }

    /// Returns true if the error is fatal on the required load path
    #[must_use]
    pub const fn is_fatal_load(&self) -> bool {
        matches!(self, Self::DatabaseRead(_) | Self::DatabaseParse(_))
    }
}
