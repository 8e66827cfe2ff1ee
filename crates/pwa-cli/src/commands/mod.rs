//! Command implementations for pwa-cli

pub mod manifest;
pub mod markup;
pub mod status;

pub use manifest::{run_show, run_update_manifest};
pub use markup::{run_head, run_scripts};
pub use status::run_status;
