//! PWA `<head>` markup generation

use pwa_core::{MANIFEST_FILE_NAME, PwaConfig};

use crate::asset::AssetResolver;
use crate::{DEFAULT_ICON_PATH, DEFAULT_THEME_COLOR};

/// Render the `<head>` block: theme-color meta, apple-touch-icon,
/// manifest link, and the kit stylesheet.
pub fn render_head(config: &PwaConfig, resolver: &AssetResolver) -> String {
    let theme_color = theme_color(config);
    let icon = touch_icon(config, resolver);
    let manifest_url = resolver.resolve(MANIFEST_FILE_NAME);
    let stylesheet = resolver.kit_stylesheet();

    format!(
        "<!-- PWA -->\n\
         <meta name=\"theme-color\" content=\"{theme_color}\" />\n\
         <link rel=\"apple-touch-icon\" href=\"{icon}\" />\n\
         <link rel=\"manifest\" href=\"{manifest_url}\" />\n\
         <link rel=\"stylesheet\" href=\"{stylesheet}\">\n\
         <!-- PWA end -->"
    )
}

/// Theme color from the manifest, accepting both `theme_color` and the
/// camel-cased `themeColor` spelling.
fn theme_color(config: &PwaConfig) -> String {
    ["theme_color", "themeColor"]
        .iter()
        .find_map(|key| config.manifest.get(*key).and_then(|v| v.as_str()))
        .unwrap_or(DEFAULT_THEME_COLOR)
        .to_string()
}

/// First icon source from the manifest, absolutized unless already a URL.
fn touch_icon(config: &PwaConfig, resolver: &AssetResolver) -> String {
    let src = config
        .manifest
        .get("icons")
        .and_then(|v| v.as_array())
        .and_then(|icons| icons.first())
        .and_then(|icon| icon.get("src"))
        .and_then(|v| v.as_str())
        .unwrap_or(DEFAULT_ICON_PATH);

    if src.starts_with("http") {
        src.to_string()
    } else {
        resolver.resolve(src)
    }
}
