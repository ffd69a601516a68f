//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};

/// creds helps you find default credentials for products and vendors.
///
/// The credential database is cached locally and refreshed from the
/// public DefaultCreds cheat sheet on demand.
#[derive(Parser, Debug)]
#[command(name = "creds")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the credential database by product or vendor keyword
    Search(SearchArgs),

    /// Download the remote dataset and rebuild the local database
    Update(UpdateArgs),
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Product or vendor to look for (case-insensitive substring)
    pub keyword: String,

    /// Proxy for the dataset download (e.g. http://127.0.0.1:8080)
    #[arg(short, long)]
    pub proxy: Option<String>,

    /// Write the matched records to creds-export.json
    #[arg(short, long)]
    pub export: bool,

    /// Refresh the database before searching
    #[arg(short, long)]
    pub update_db: bool,

    /// Print the matches as a JSON array
    #[arg(short, long)]
    pub json: bool,

    /// Print the matches as a table (default when no format is selected)
    #[arg(short, long)]
    pub table: bool,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Accepted for compatibility; an update always re-fetches
    #[arg(short, long)]
    pub force: bool,
}
