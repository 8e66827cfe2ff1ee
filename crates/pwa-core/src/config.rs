//! Configuration model parsed from `pwa.toml`
//!
//! The configuration carries presentation flags consumed by the asset and
//! markup layers plus the `[manifest]` table the reconciler materializes.
//! Only `manifest` is consumed by the core itself.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::manifest::ManifestSpec;

/// Which directory the deployment serves assets from.
///
/// Shared-hosting setups sometimes run the application with the `public/`
/// directory as the document root; asset URLs differ accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingDirectory {
    /// `public/` is the document root; asset paths drop their `public/` prefix.
    Public,
    /// The application root is the document root.
    #[default]
    Root,
}

/// Where the install toast anchors on small viewports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmallDevicePosition {
    Top,
    Bottom,
}

impl SmallDevicePosition {
    /// CSS class suffix applied to the toast container.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Top => "small-device-top",
            Self::Bottom => "small-device-bottom",
        }
    }
}

fn default_app_name() -> String {
    "Laravel".to_string()
}

/// PWA Kit configuration parsed from `pwa.toml`
///
/// Every field has a default so a minimal file containing only a
/// `[manifest]` table is valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PwaConfig {
    /// Master switch for script and toast generation.
    pub enable_pwa: bool,

    /// Emit `console.log` diagnostics in the generated registration script.
    pub debug: bool,

    /// Show the install-promotion toast on first load.
    #[serde(rename = "install-toast-show")]
    pub install_toast_show: bool,

    /// Add `data-navigate-once` to script tags for Livewire-navigated apps.
    #[serde(rename = "livewire-app")]
    pub livewire_app: bool,

    /// Document-root layout of the deployment.
    pub system_processing_directory: ProcessingDirectory,

    /// Application name used in the toast title and aria labels.
    pub app_name: String,

    /// Toast title; defaults to a welcome line built from `app_name`.
    pub title: Option<String>,

    /// Toast description below the title.
    pub description: Option<String>,

    /// Label of the toast install button.
    pub install_now_button_text: Option<String>,

    /// Toast anchor position on small viewports.
    pub small_device_position: Option<SmallDevicePosition>,

    /// The web app manifest document, key order preserved.
    pub manifest: toml::Table,
}

impl Default for PwaConfig {
    fn default() -> Self {
        Self {
            enable_pwa: false,
            debug: false,
            install_toast_show: false,
            livewire_app: false,
            system_processing_directory: ProcessingDirectory::default(),
            app_name: default_app_name(),
            title: None,
            description: None,
            install_now_button_text: None,
            small_device_position: None,
            manifest: toml::Table::new(),
        }
    }
}

impl PwaConfig {
    /// Parse a configuration from TOML content.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse {
            path: crate::constants::CONFIG_FILE_NAME.into(),
            message: e.to_string(),
        })
    }

    /// Load a configuration file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        toml::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Build the manifest spec from the `[manifest]` table.
    ///
    /// A fresh spec is constructed on every call; nothing is cached.
    pub fn manifest_spec(&self) -> ManifestSpec {
        let mut spec = ManifestSpec::new();
        for (key, value) in &self.manifest {
            spec.insert(key.clone(), toml_to_json(value));
        }
        spec
    }
}

/// Convert a TOML value to a JSON value, preserving table key order.
///
/// Datetimes have no JSON counterpart and are stringified.
pub fn toml_to_json(value: &toml::Value) -> serde_json::Value {
    match value {
        toml::Value::String(s) => serde_json::Value::String(s.clone()),
        toml::Value::Integer(i) => serde_json::Value::from(*i),
        toml::Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        toml::Value::Boolean(b) => serde_json::Value::Bool(*b),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        toml::Value::Array(items) => {
            serde_json::Value::Array(items.iter().map(toml_to_json).collect())
        }
        toml::Value::Table(table) => {
            let mut map = serde_json::Map::new();
            for (key, item) in table {
                map.insert(key.clone(), toml_to_json(item));
            }
            serde_json::Value::Object(map)
        }
    }
}
