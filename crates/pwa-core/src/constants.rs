//! Shared constants for PWA Kit

/// File name of the generated manifest at every target location.
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "pwa.toml";

/// Manifest key that must serialize second-to-last.
pub const KEY_START_URL: &str = "start_url";

/// Manifest key that must serialize last.
pub const KEY_ICONS: &str = "icons";

/// Fallback start URL when the configuration leaves it unset or empty.
pub const DEFAULT_START_URL: &str = "/";
