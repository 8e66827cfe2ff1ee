//! Service-worker registration script generation
//!
//! Assembles the toast markup, the kit script tag, and the inline
//! registration script. Output is a single block suitable for inclusion
//! at the end of `<body>`.

use pwa_core::PwaConfig;
use tracing::debug;

use crate::asset::AssetResolver;
use crate::toast::render_install_toast;

/// Render the full PWA script block, or an empty string when disabled.
pub fn render_scripts(config: &PwaConfig, resolver: &AssetResolver) -> String {
    if !config.enable_pwa {
        debug!("pwa disabled, emitting no scripts");
        return String::new();
    }

    let sw_src = resolver.resolve(crate::SERVICE_WORKER_PATH);
    let kit_src = resolver.kit_script();
    // Livewire swaps the DOM on navigation; the attribute keeps scripts
    // from re-running on every page visit.
    let navigate_attr = if config.livewire_app {
        " data-navigate-once"
    } else {
        ""
    };

    let mut script = String::new();
    script.push_str(&render_install_toast(config));
    script.push_str(&format!("<script src=\"{kit_src}\"></script>"));
    script.push_str(&format!("<script{navigate_attr}>"));
    script.push_str("\"use strict\";");
    script.push_str("document.addEventListener(\"DOMContentLoaded\", function() {");
    script.push_str("if (\"serviceWorker\" in navigator) {");
    script.push_str(&format!(
        "navigator.serviceWorker.register(\"{sw_src}\").then("
    ));
    script.push_str(&format!(
        "function(registration) {{ {} }},",
        debug_log(config, "\"Service worker registration succeeded:\", registration")
    ));
    script.push_str(&format!(
        "function(error) {{ {} }}",
        debug_log(config, "\"Service worker registration failed:\", error")
    ));
    script.push_str(");");
    script.push_str(&format!(
        "}} else {{ {} }}",
        debug_log(config, "\"Service workers are not supported.\"")
    ));

    if config.install_toast_show {
        script.push_str(
            "if(!window.matchMedia(\"(display-mode: standalone)\").matches && !isToastShown()){",
        );
        script.push_str(
            "setTimeout(()=>{showInstallPromotion(); localStorage.setItem(\"pwaToastShown\",Date.now());},3000);}",
        );
    }

    script.push_str("});");
    script.push_str("</script>");
    script
}

fn debug_log(config: &PwaConfig, args: &str) -> String {
    if config.debug {
        format!("console.log({args});")
    } else {
        String::new()
    }
}
