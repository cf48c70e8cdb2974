pub mod init;
pub mod search;
pub mod serve;

use anyhow::{Context, Result};
use std::path::PathBuf;

/// The explicit `--root`, or the current directory.
pub(crate) fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf> {
    match root {
        Some(root) => Ok(root),
        None => std::env::current_dir().context("Failed to determine current directory"),
    }
}
