//! Install-promotion toast markup

use pwa_core::PwaConfig;

/// Render the install toast container.
///
/// Returns an empty string when PWA support is disabled. The app name is
/// HTML-escaped; title and description come from configuration and may
/// carry intentional markup.
pub fn render_install_toast(config: &PwaConfig) -> String {
    if !config.enable_pwa {
        return String::new();
    }

    let app_name = html_escape(&config.app_name);
    let title = config
        .title
        .clone()
        .unwrap_or_else(|| format!("Welcome to {app_name}!"));
    let description = config.description.clone().unwrap_or_else(|| {
        "Click the <strong>Install Now</strong> button & enjoy it just like an app.".to_string()
    });
    let button_text = config
        .install_now_button_text
        .as_deref()
        .unwrap_or("Install Now");
    let position_class = config
        .small_device_position
        .map(|p| format!(" {}", p.css_class()))
        .unwrap_or_default();

    format!(
        "<div class=\"app-install-toast{position_class}\" role=\"alert\" id=\"install-prompt\" aria-label=\"Install {app_name}\">\
         <div class=\"app-install-toast-content\">\
         <div class=\"app-install-toast-text\">\
         <h6 class=\"app-install-toast-title\">{title}</h6>\
         <p class=\"app-install-toast-desc\">{description}</p>\
         <button id=\"installPWAButton\" class=\"app-install-toast-action\">{button_text}</button>\
         </div>\
         </div>\
         <button class=\"app-install-toast-btn-close\" type=\"button\" id=\"install-pwa-button-close\" aria-label=\"Close install prompt\"></button>\
         </div>"
    )
}

/// Minimal HTML escaping for attribute and text interpolation.
pub fn html_escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}
