//! Core types and logic for the creds credential database.
//!
//! This crate provides everything that does not touch the network:
//!
//! - **Model**: the [`Credential`] record and its JSON representation
//! - **Parsing**: CSV dataset parsing with per-row validation
//! - **Search**: case-insensitive vendor filtering
//! - **Store**: the locally persisted dataset file
//! - **Errors**: [`CredsError`], shared by every crate in the workspace
//!
//! # Example
//!
//! ```rust,ignore
//! use creds_core::{parse, search, store::DatasetStore};
//!
//! let records = parse::parse_dataset(csv_body)?;
//! let store = DatasetStore::new(storage_dir);
//! store.replace(&records)?;
//!
//! let matches = search::filter_by_vendor(&store.load()?, "cisco");
//! ```

mod error;
pub mod model;
pub mod parse;
pub mod search;
pub mod store;

pub use error::{CredsError, Result};
pub use model::Credential;
