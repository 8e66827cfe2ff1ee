//! Status command implementation

use std::path::Path;

use colored::Colorize;

use pwa_core::{PwaConfig, WriteTarget};

use crate::cli::TargetArgs;
use crate::error::Result;

/// Run the status command
///
/// Reports whether the configuration loads, whether PWA generation is
/// enabled, and which manifest targets currently exist on disk.
pub fn run_status(config_path: &Path, targets: &TargetArgs) -> Result<()> {
    println!("{} PWA Kit status", "=>".blue().bold());

    match PwaConfig::load(config_path) {
        Ok(config) => {
            println!(
                "   {} config {} loaded",
                "OK".green().bold(),
                config_path.display().to_string().cyan()
            );
            let enabled = if config.enable_pwa {
                "enabled".green()
            } else {
                "disabled".yellow()
            };
            println!("   {} PWA generation {}", "--".dimmed(), enabled);
            let spec = config.manifest_spec();
            println!(
                "   {} manifest keys: {}, icons: {}",
                "--".dimmed(),
                spec.len(),
                if spec.has_icons() {
                    "present".green()
                } else {
                    "missing".red()
                }
            );
        }
        Err(e) => {
            println!(
                "   {} config {}: {}",
                "!!".red().bold(),
                config_path.display().to_string().cyan(),
                e
            );
        }
    }

    for target in WriteTarget::standard_pair(&targets.public_root, &targets.base_root) {
        let state = if target.exists() {
            "exists".green()
        } else {
            "absent".yellow()
        };
        println!("   {} {} {}", "--".dimmed(), target.to_string().cyan(), state);
    }

    Ok(())
}
