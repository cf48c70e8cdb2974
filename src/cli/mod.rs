use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grepctx")]
#[command(author, version, about = "Exact-match code search grouped by file")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default .grepctx/config.toml in the current directory
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Search the working tree
    Search {
        /// Pattern to search for (git grep syntax, or fixed text with fixed_strings)
        query: String,

        /// Print the result collection as JSON
        #[arg(long)]
        json: bool,

        /// Working tree to search (default: current directory)
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Seconds to wait for git grep before giving up
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        timeout_secs: Option<u64>,

        /// Print metrics to stderr after the search
        #[arg(long)]
        metrics: bool,
    },

    /// Start the MCP server on stdio
    Serve {
        /// Working tree to search (default: current directory)
        #[arg(short, long)]
        root: Option<PathBuf>,
    },
}
