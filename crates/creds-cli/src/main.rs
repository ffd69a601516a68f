//! creds - find default credentials for products and network devices.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    creds_cli::run().await
}
