//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;

use crate::config::Settings;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    crate::logging::init(cli.verbose);

    // Storage location and dataset URL are resolved once here and passed
    // down; nothing reads the environment after this point.
    let settings = Settings::resolve()?;
    settings.ensure_storage_dir()?;

    let ctx = commands::Context { settings };

    match cli.command {
        Commands::Search(args) => commands::search::execute(&ctx, args).await,
        Commands::Update(args) => commands::update::execute(&ctx, args).await,
    }
}
