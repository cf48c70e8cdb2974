use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use grepctx::cli::{Cli, Commands};
use grepctx::config::Config;
use grepctx::logging::init_logging;
use grepctx::metrics;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let project_root = match &cli.command {
        Commands::Search { root: Some(root), .. } | Commands::Serve { root: Some(root) } => {
            root.clone()
        }
        _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    // Commands reload the config and report parse errors themselves
    let config = Config::load(&project_root).unwrap_or_default();

    // The guard MUST be held until program exit to ensure logs are flushed
    let _logging_guard = init_logging(&config.logging, &project_root)?;

    tracing::debug!("Project root: {}", project_root.display());

    metrics::register_metrics();

    match cli.command {
        Commands::Init { force } => {
            grepctx::commands::init::run(force).await?;
        }
        Commands::Search {
            query,
            json,
            root,
            timeout_secs,
            metrics,
        } => {
            grepctx::commands::search::run(&query, json, root, timeout_secs, metrics).await?;
        }
        Commands::Serve { root } => {
            grepctx::commands::serve::run(root).await?;
        }
    }

    Ok(())
}
