//! Output rendering: table, JSON array, and export file.

use creds_core::{Credential, CredsError};
use std::path::Path;
use tabled::{settings::Style, Table, Tabled};

/// File the `--export` flag writes to, in the working directory.
pub const EXPORT_FILE_NAME: &str = "creds-export.json";

#[derive(Tabled)]
struct CredentialRow<'a> {
    #[tabled(rename = "Product Vendor")]
    product_vendor: &'a str,
    #[tabled(rename = "Username")]
    username: &'a str,
    #[tabled(rename = "Password")]
    password: &'a str,
}

impl<'a> From<&'a Credential> for CredentialRow<'a> {
    fn from(record: &'a Credential) -> Self {
        Self {
            product_vendor: &record.product_vendor,
            username: &record.username,
            password: &record.password,
        }
    }
}

/// Render matches as a rounded table, one row per record.
#[must_use]
pub fn render_table(matches: &[&Credential]) -> String {
    let rows: Vec<CredentialRow<'_>> = matches.iter().copied().map(CredentialRow::from).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Render matches as one compact JSON array.
pub fn render_json(matches: &[&Credential]) -> creds_core::Result<String> {
    serde_json::to_string(matches).map_err(|_| CredsError::ResultEncoding)
}

/// Write matches as pretty-printed JSON to `path`.
pub fn write_export(matches: &[&Credential], path: &Path) -> creds_core::Result<()> {
    let body = serde_json::to_string_pretty(matches).map_err(|_| CredsError::ResultEncoding)?;
    std::fs::write(path, body).map_err(CredsError::Export)
}
