//! Core of PWA Kit
//!
//! Provides the configuration model, manifest canonicalization, and the
//! reconciler that materializes `manifest.json` at its target locations.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod manifest;
pub mod reconcile;

pub use config::{ProcessingDirectory, PwaConfig, SmallDevicePosition};
pub use constants::MANIFEST_FILE_NAME;
pub use error::{Error, Result};
pub use manifest::ManifestSpec;
pub use reconcile::{ReconcileReport, TargetOutcome, WriteResult, WriteTarget, reconcile};
