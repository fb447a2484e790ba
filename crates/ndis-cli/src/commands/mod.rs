//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod config;
pub mod init;
pub mod review;
pub mod search;
pub mod show;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ndis_core::config::{Config, DEFAULT_CONFIG_PATH};
use ndis_core::review::{ReviewService, ReviewValidator};
use ndis_core::Directory;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// ndis-directory - NDIS service provider directory
#[derive(Debug, Parser)]
#[command(name = "ndis-directory")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the data directory from the configuration
    #[arg(long, global = true, env = "NDIS_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create configuration and data files
    Init(init::InitArgs),

    /// Submit and read reviews
    #[command(subcommand)]
    Review(review::ReviewCommand),

    /// Search listings
    Search(search::SearchArgs),

    /// Show a listing with its reviews
    Show(show::ShowArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Settings shared by every command
pub struct AppContext {
    pub config_path: PathBuf,
    pub config: Config,
}

impl AppContext {
    fn load(cli: &Cli) -> Result<Self> {
        let config_path = cli
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        let mut config = Config::load_or_default(&config_path)
            .with_context(|| format!("Failed to load {}", config_path.display()))?;

        if let Some(data_dir) = &cli.data_dir {
            config.storage.data_dir = data_dir.clone();
        }

        Ok(Self {
            config_path,
            config,
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Open the JSON stores and build the directory service
    pub fn directory(&self) -> Result<Directory> {
        let (catalog, store) = ndis_storage::open(&self.config.storage)
            .context("Failed to open data directory")?;
        let reviews = ReviewService::with_store(Arc::new(store))
            .with_validator(ReviewValidator::from_config(&self.config.review));
        Ok(Directory::new(catalog, reviews))
    }
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let ctx = AppContext::load(&cli)?;
    tracing::debug!("Using data directory {:?}", ctx.config.storage.data_dir);

    match cli.command {
        Commands::Init(args) => init::execute(&ctx, args),
        Commands::Review(cmd) => review::execute(&ctx, cmd),
        Commands::Search(args) => search::execute(&ctx, args),
        Commands::Show(args) => show::execute(&ctx, args),
        Commands::Config(cmd) => config::execute(&ctx, cmd),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
