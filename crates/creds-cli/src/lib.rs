//! # creds-cli
//!
//! Command-line interface for the creds default-credentials database.
//!
//! - **search**: keyword lookup over the locally cached dataset
//! - **update**: re-fetch the remote CSV and rebuild the cache
//! - **Output**: pretty table and/or one JSON array on stdout; all
//!   diagnostics go to stderr

pub mod cli;
pub mod config;
pub mod db;
pub mod logging;
pub mod output;

pub use cli::run;
