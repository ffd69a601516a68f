//! `creds update` - rebuild the local database from the remote source.

use anyhow::Result;

use super::Context;
use crate::cli::args::UpdateArgs;
use crate::db;

/// Fetch and persist a fresh copy of the dataset.
///
/// `--force` is accepted but changes nothing: every update re-fetches and
/// overwrites. Fetch and parse failures propagate to a nonzero exit.
pub async fn execute(ctx: &Context, _args: UpdateArgs) -> Result<()> {
    let client = ctx.client(None)?;
    let store = ctx.store();

    db::refresh(&client, &store).await?;
    Ok(())
}
