//! `creds search` - keyword lookup over the local database.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tracing::warn;

use super::Context;
use crate::cli::args::SearchArgs;
use crate::db::{self, EnsureOutcome};
use crate::output;
use creds_core::search::filter_by_vendor;

pub async fn execute(ctx: &Context, args: SearchArgs) -> Result<()> {
    let (table, json) = select_formats(&args);

    let client = ctx.client(args.proxy.as_deref())?;
    let store = ctx.store();

    if args.update_db {
        // best-effort: a failed refresh falls through to the on-disk data
        if let Err(e) = db::refresh(&client, &store).await {
            warn!(error = %e, "refresh failed, searching the existing database");
        }
    }

    if let EnsureOutcome::RefreshFailed(e) = db::ensure(&client, &store).await {
        warn!(error = %e, "refresh failed, searching the existing database");
    }

    let records = store.load()?;
    let matches = filter_by_vendor(&records, &args.keyword);

    if matches.is_empty() {
        eprintln!("{}", "no credentials found with search keyword".yellow());
        return Ok(());
    }

    if table {
        println!("{}", output::render_table(&matches));
    }

    if json {
        println!("{}", output::render_json(&matches)?);
    }

    if args.export {
        let path = Path::new(output::EXPORT_FILE_NAME);
        output::write_export(&matches, path)?;
        eprintln!(
            "{} {}",
            "exported matches to".green(),
            path.display()
        );
    }

    Ok(())
}

/// Default to table output when no format flag is given; both may be set.
const fn select_formats(args: &SearchArgs) -> (bool, bool) {
    if args.table || args.json {
        (args.table, args.json)
    } else {
        (true, false)
    }
}
