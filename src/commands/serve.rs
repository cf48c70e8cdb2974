//! MCP server command implementation.

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use super::resolve_root;
use crate::config::Config;
use crate::mcp::GrepServer;
use crate::search::GrepSearch;

/// Start the MCP server over stdio for the given working tree.
pub async fn run(root: Option<PathBuf>) -> Result<()> {
    let root = resolve_root(root)?;
    let config = Config::load(&root)?;

    let search = Arc::new(GrepSearch::from_config(&root, &config));

    info!("Starting MCP server with stdio transport for {}", root.display());
    GrepServer::new(search).run().await?;

    Ok(())
}
