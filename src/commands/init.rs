use anyhow::{bail, Result};
use std::env;
use tracing::info;

use crate::Config;

pub async fn run(force: bool) -> Result<()> {
    let root = env::current_dir()?;

    if Config::is_initialized(&root) && !force {
        bail!(
            "grepctx is already initialized in {:?} (use --force to overwrite)",
            Config::config_dir(&root)
        );
    }

    let config = Config::default();
    config.save(&root)?;

    info!("Initialized grepctx in {:?}", Config::config_dir(&root));
    println!(
        "✓ Created {} with default configuration",
        Config::config_dir(&root).join("config.toml").display()
    );
    println!("\nNext steps:");
    println!("  1. Edit .grepctx/config.toml to adjust search and symbol settings");
    println!("  2. Run 'grepctx search <query>' to search the working tree");
    println!("  3. Run 'grepctx serve' to start the MCP server");

    Ok(())
}
