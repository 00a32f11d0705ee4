//! Waypoint CLI
//!
//! Inspection tool for the navigation state adapter: adapts deep-link paths
//! and checks navigation configuration files.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use commands::adapt::{self, AdaptArgs};

#[derive(Parser)]
#[command(name = "waypoint")]
#[command(about = "Waypoint - layered navigation state from deep-link paths", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path
    #[arg(short, long, global = true, default_value = "waypoint.toml")]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Adapt a path and print the navigation state as JSON
    Adapt(AdaptArgs),

    /// Validate a configuration file and report overlapping modal mappings
    CheckConfig,

    /// Print the built-in configuration as TOML
    DefaultConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Adapt(args) => {
            let config = waypoint_nav::NavigationConfig::load_or_default(&cli.config)?;
            config.validate()?;
            adapt::run(&args, &config)?;
        }

        Commands::CheckConfig => {
            commands::config::check(&cli.config)?;
        }

        Commands::DefaultConfig => {
            commands::config::print_default()?;
        }
    }

    Ok(())
}
