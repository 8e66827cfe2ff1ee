//! Markup command implementations
//!
//! Print the generated head block or script block for template inclusion.

use std::path::Path;

use pwa_assets::{AssetResolver, render_head, render_scripts};
use pwa_core::PwaConfig;

use crate::cli::MarkupArgs;
use crate::error::Result;

fn resolver(config: &PwaConfig, markup: &MarkupArgs) -> AssetResolver {
    AssetResolver::new(markup.base_url.clone(), config.system_processing_directory)
        .with_local_request(markup.local)
}

/// Run the head command
pub fn run_head(config_path: &Path, markup: &MarkupArgs) -> Result<()> {
    let config = PwaConfig::load(config_path)?;
    println!("{}", render_head(&config, &resolver(&config, markup)));
    Ok(())
}

/// Run the scripts command
pub fn run_scripts(config_path: &Path, markup: &MarkupArgs) -> Result<()> {
    let config = PwaConfig::load(config_path)?;
    println!("{}", render_scripts(&config, &resolver(&config, markup)));
    Ok(())
}
