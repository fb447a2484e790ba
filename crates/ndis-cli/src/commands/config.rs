//! Config command
//!
//! Inspect the effective configuration.

use super::AppContext;
use anyhow::Result;
use clap::Subcommand;

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the configuration file path
    Path,
}

/// Execute the config command
pub fn execute(ctx: &AppContext, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(ctx, json),
        ConfigCommand::Path => {
            println!("{}", ctx.config_path().display());
            Ok(())
        }
    }
}

fn show_config(ctx: &AppContext, as_json: bool) -> Result<()> {
    use colored::Colorize;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&ctx.config)?);
        return Ok(());
    }

    println!("{}", "Configuration:".bold().underline());
    let source = if ctx.config_path().exists() {
        ctx.config_path().display().to_string()
    } else {
        format!("{} (not found, using defaults)", ctx.config_path().display())
    };
    println!("{}", source.dimmed());
    println!();
    println!("{}", ctx.config.to_toml()?);
    Ok(())
}
