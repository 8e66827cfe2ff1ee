//! Manifest command implementations
//!
//! `update-manifest` drives the reconciler and reports one status line per
//! target; `show` prints the in-memory canonical document without touching
//! the filesystem.

use std::path::Path;

use colored::Colorize;

use pwa_core::{PwaConfig, WriteResult, WriteTarget, reconcile};

use crate::cli::TargetArgs;
use crate::error::{CliError, Result};

/// Run the update-manifest command
pub fn run_update_manifest(config_path: &Path, targets: &TargetArgs, force: bool) -> Result<()> {
    println!("{} Updating manifest.json...", "=>".blue().bold());

    let config = PwaConfig::load(config_path)?;
    let spec = config.manifest_spec();
    let pair = WriteTarget::standard_pair(&targets.public_root, &targets.base_root);

    let report = reconcile(&spec, &pair, force)?;

    for outcome in report.outcomes() {
        let path = outcome.target.to_string();
        match &outcome.result {
            WriteResult::Written => {
                println!("   {} {} written", "OK".green().bold(), path.cyan());
            }
            WriteResult::SkippedExists => {
                println!(
                    "   {} {} skipped (exists, use --force to overwrite)",
                    "--".yellow().bold(),
                    path.cyan()
                );
            }
            WriteResult::Failed { reason } => {
                println!("   {} {} failed: {}", "!!".red().bold(), path.cyan(), reason);
            }
        }
    }

    if report.success() {
        println!("{} Manifest updated successfully.", "OK".green().bold());
        Ok(())
    } else {
        Err(CliError::user("one or more manifest targets failed"))
    }
}

/// Run the show command
///
/// Prints the canonical manifest built from configuration (the document a
/// write would publish), not any on-disk copy.
pub fn run_show(config_path: &Path) -> Result<()> {
    let config = PwaConfig::load(config_path)?;
    let encoded = config.manifest_spec().canonicalize().to_json()?;
    print!("{encoded}");
    Ok(())
}
