//! End-to-end integration test for the vertical slice
//!
//! Exercises the complete flow: config loading -> manifest reconciliation ->
//! on-disk output -> markup generation.

use std::fs;

use pwa_assets::{AssetResolver, render_head, render_scripts};
use pwa_core::{PwaConfig, WriteResult, WriteTarget, reconcile};
use tempfile::TempDir;

/// Set up a project directory with a public root and a valid pwa.toml
fn setup_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("public")).unwrap();

    fs::write(
        temp.path().join("pwa.toml"),
        r##"
enable_pwa = true
debug = true
install-toast-show = true
app_name = "Demo"
system_processing_directory = "public"

[manifest]
name = "Demo"
short_name = "Demo"
theme_color = "#336699"
display = "standalone"
start_url = "/home"

[[manifest.icons]]
src = "/logo.png"
sizes = "512x512"
type = "image/png"
"##,
    )
    .unwrap();

    temp
}

#[test]
fn test_config_to_disk_round_trip() {
    let temp = setup_project();
    let config = PwaConfig::load(&temp.path().join("pwa.toml")).unwrap();
    let targets = WriteTarget::standard_pair(&temp.path().join("public"), temp.path());

    let report = reconcile(&config.manifest_spec(), &targets, true).unwrap();
    assert!(report.success());
    assert!(
        report
            .outcomes()
            .iter()
            .all(|o| o.result == WriteResult::Written)
    );

    for target in &targets {
        let document: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(target.path()).unwrap()).unwrap();
        assert_eq!(document["name"], "Demo");
        assert_eq!(document["start_url"], "/home");
        assert_eq!(document["icons"][0]["sizes"], "512x512");

        let keys: Vec<&String> = document.as_object().unwrap().keys().collect();
        assert_eq!(keys.last().unwrap().as_str(), "icons");
        assert_eq!(keys[keys.len() - 2].as_str(), "start_url");
    }
}

#[test]
fn test_rerun_without_force_preserves_files() {
    let temp = setup_project();
    let config = PwaConfig::load(&temp.path().join("pwa.toml")).unwrap();
    let targets = WriteTarget::standard_pair(&temp.path().join("public"), temp.path());

    reconcile(&config.manifest_spec(), &targets, true).unwrap();
    let before = fs::read(targets[0].path()).unwrap();

    let report = reconcile(&config.manifest_spec(), &targets, false).unwrap();
    assert!(report.success());
    assert!(
        report
            .outcomes()
            .iter()
            .all(|o| o.result == WriteResult::SkippedExists)
    );
    assert_eq!(fs::read(targets[0].path()).unwrap(), before);
}

#[test]
fn test_markup_generation_from_loaded_config() {
    let temp = setup_project();
    let config = PwaConfig::load(&temp.path().join("pwa.toml")).unwrap();
    let resolver = AssetResolver::new("https://demo.example", config.system_processing_directory)
        .with_public_root(temp.path().join("public"));

    let head = render_head(&config, &resolver);
    assert!(head.contains("content=\"#336699\""));
    assert!(head.contains("href=\"https://demo.example/logo.png\""));
    assert!(head.contains("href=\"https://demo.example/manifest.json\""));

    let scripts = render_scripts(&config, &resolver);
    assert!(scripts.contains("serviceWorker.register(\"https://demo.example/sw.js\")"));
    assert!(scripts.contains("console.log"));
    assert!(scripts.contains("Welcome to Demo!"));
    assert!(scripts.contains("showInstallPromotion"));
}
