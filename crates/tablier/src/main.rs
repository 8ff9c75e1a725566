//! Tablier CLI - renders every UI state of the recipe search templates.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "tablier")]
#[command(about = "Renders every UI state of the recipe search templates to static HTML")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to tablier.toml config file
    #[arg(short, long, default_value = "tablier.toml", global = true)]
    config: PathBuf,

    /// Output directory (defaults to config or "preview")
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate once, then regenerate whenever a template changes
    Watch,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    let config = config::load_config(&cli.config)?;

    match cli.command {
        None => commands::generate::run(&config, cli.output).await?,
        Some(Commands::Watch) => commands::watch::run(&config, cli.output).await?,
    }

    tracing::info!("Done!");

    Ok(())
}
