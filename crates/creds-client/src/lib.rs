//! HTTP client for the remote default-credentials dataset.
//!
//! This crate provides the [`DatasetClient`] that downloads the CSV body
//! the rest of the workspace parses and persists.

mod client;

pub use client::{DatasetClient, DatasetClientBuilder, DEFAULT_DATASET_URL};
pub use creds_core::{CredsError, Result};
