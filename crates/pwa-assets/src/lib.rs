//! Markup and script generation for PWA Kit
//!
//! Renders the `<head>` block, the install-promotion toast, and the
//! service-worker registration script from a [`pwa_core::PwaConfig`].
//! Everything here is pure string assembly; the only filesystem access is
//! the kit-asset existence probe in [`AssetResolver`].

pub mod asset;
pub mod head;
pub mod script;
pub mod toast;

pub use asset::AssetResolver;
pub use head::render_head;
pub use script::render_scripts;
pub use toast::render_install_toast;

/// Fallback theme color when the manifest does not set one.
pub const DEFAULT_THEME_COLOR: &str = "#6777ef";

/// Fallback icon path when the manifest has no icons.
pub const DEFAULT_ICON_PATH: &str = "logo.png";

/// Service worker file served from the public root.
pub const SERVICE_WORKER_PATH: &str = "sw.js";

/// Kit CSS when published into the application's package directory.
pub const KIT_CSS_PACKAGE_PATH: &str = "packages/pwa-kit/css/pwa-kit.css";

/// Kit CSS fallback under the vendor directory.
pub const KIT_CSS_VENDOR_PATH: &str = "vendor/pwa-kit/assets/css/pwa-kit.css";

/// Kit JS when published into the application's package directory.
pub const KIT_JS_PACKAGE_PATH: &str = "packages/pwa-kit/js/pwa-kit.js";

/// Kit JS fallback under the vendor directory.
pub const KIT_JS_VENDOR_PATH: &str = "vendor/pwa-kit/assets/js/pwa-kit.js";
