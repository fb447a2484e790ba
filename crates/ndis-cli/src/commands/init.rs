//! Init command
//!
//! Create the configuration file and empty data files.

use super::AppContext;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;

/// Arguments for the init command
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Keep data in the per-user data directory instead of the project
    #[arg(long)]
    pub user: bool,

    /// Overwrite an existing configuration file
    #[arg(long, short)]
    pub force: bool,
}

/// Execute the init command
pub fn execute(ctx: &AppContext, args: InitArgs) -> Result<()> {
    use colored::Colorize;

    let config_path = ctx.config_path();
    let mut config = ctx.config.clone();
    if args.user {
        config.storage.data_dir = ndis_storage::default_data_dir();
    }

    if config_path.exists() && !args.force {
        println!(
            "{} Configuration already exists at {} (use --force to overwrite)",
            "⚠".yellow(),
            config_path.display()
        );
    } else {
        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }
        fs::write(config_path, config.to_toml()?)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        println!("{} Wrote {}", "✓".green(), config_path.display());
    }

    let (catalog, reviews) =
        ndis_storage::open(&config.storage).context("Failed to create data files")?;

    if !catalog.path().exists() {
        fs::write(catalog.path(), "[]\n")
            .with_context(|| format!("Failed to create {}", catalog.path().display()))?;
    }

    println!("{} Listings: {}", "✓".green(), catalog.path().display());
    println!("{} Reviews:  {}", "✓".green(), reviews.path().display());
    tracing::info!("Initialized data directory {:?}", config.storage.data_dir);

    Ok(())
}
