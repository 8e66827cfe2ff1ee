//! PWA Kit CLI
//!
//! The command-line interface for generating and maintaining PWA assets.

mod cli;
mod commands;
mod error;

use std::path::Path;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(&cli.config, cmd),
        None => {
            println!("{} PWA Kit CLI", "pwa".green().bold());
            println!();
            println!("Run {} for available commands.", "pwa --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(config_path: &Path, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::UpdateManifest { targets, force } => {
            commands::run_update_manifest(config_path, &targets, force)
        }
        Commands::Show => commands::run_show(config_path),
        Commands::Head { markup } => commands::run_head(config_path, &markup),
        Commands::Scripts { markup } => commands::run_scripts(config_path, &markup),
        Commands::Status { targets } => commands::run_status(config_path, &targets),
    }
}
