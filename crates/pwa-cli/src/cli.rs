//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// PWA Kit - Generate and maintain Progressive Web App assets
#[derive(Parser, Debug)]
#[command(name = "pwa")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "pwa.toml")]
    pub config: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Target directory options shared by manifest commands
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct TargetArgs {
    /// Web-servable public root directory
    #[arg(long, default_value = "public")]
    pub public_root: PathBuf,

    /// Application base root directory
    #[arg(long, default_value = ".")]
    pub base_root: PathBuf,
}

/// Markup rendering options shared by head/scripts commands
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct MarkupArgs {
    /// Base URL the generated asset links point at
    #[arg(long, default_value = "http://localhost")]
    pub base_url: String,

    /// Treat the request context as local (skips the public/ URL prefix)
    #[arg(long)]
    pub local: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Generate or update manifest.json at the public and base roots
    ///
    /// Examples:
    ///   pwa update-manifest              # Write where no manifest exists yet
    ///   pwa update-manifest --force      # Overwrite existing manifests
    UpdateManifest {
        #[command(flatten)]
        targets: TargetArgs,

        /// Overwrite existing manifest.json without confirmation
        #[arg(long)]
        force: bool,
    },

    /// Print the canonical manifest JSON built from configuration
    Show,

    /// Print the PWA <head> markup
    Head {
        #[command(flatten)]
        markup: MarkupArgs,
    },

    /// Print the service-worker registration script block
    Scripts {
        #[command(flatten)]
        markup: MarkupArgs,
    },

    /// Report configuration and target state
    Status {
        #[command(flatten)]
        targets: TargetArgs,
    },
}
