//! Binary-level tests for the pwa CLI

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn setup_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("public")).unwrap();
    fs::write(
        temp.path().join("pwa.toml"),
        r#"
[manifest]
name = "Demo"
start_url = "/home"

[[manifest.icons]]
src = "/logo.png"
sizes = "512x512"
"#,
    )
    .unwrap();
    temp
}

fn pwa() -> Command {
    Command::cargo_bin("pwa").unwrap()
}

#[test]
fn test_update_manifest_succeeds() {
    let temp = setup_project();

    pwa()
        .current_dir(temp.path())
        .args(["update-manifest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("written"));

    assert!(temp.path().join("public/manifest.json").is_file());
    assert!(temp.path().join("manifest.json").is_file());
}

#[test]
fn test_update_manifest_skips_existing_without_force() {
    let temp = setup_project();
    fs::write(temp.path().join("manifest.json"), "{\"name\": \"manual\"}").unwrap();

    pwa()
        .current_dir(temp.path())
        .args(["update-manifest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped (exists"));

    assert_eq!(
        fs::read_to_string(temp.path().join("manifest.json")).unwrap(),
        "{\"name\": \"manual\"}"
    );
}

#[test]
fn test_update_manifest_force_overwrites() {
    let temp = setup_project();
    fs::write(temp.path().join("manifest.json"), "{\"name\": \"manual\"}").unwrap();

    pwa()
        .current_dir(temp.path())
        .args(["update-manifest", "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join("manifest.json")).unwrap();
    assert!(content.contains("\"name\": \"Demo\""));
}

#[test]
fn test_update_manifest_missing_icons_exits_nonzero() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("public")).unwrap();
    fs::write(temp.path().join("pwa.toml"), "[manifest]\nname = \"Demo\"\n").unwrap();

    pwa()
        .current_dir(temp.path())
        .args(["update-manifest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("icons"));

    assert!(!temp.path().join("manifest.json").exists());
}

#[test]
fn test_update_manifest_missing_public_root_exits_nonzero() {
    let temp = setup_project();
    fs::remove_dir(temp.path().join("public")).unwrap();

    pwa()
        .current_dir(temp.path())
        .args(["update-manifest"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("failed"));

    // Independent targets: the base root is still written
    assert!(temp.path().join("manifest.json").is_file());
}

#[test]
fn test_show_prints_canonical_json() {
    let temp = setup_project();

    let output = pwa()
        .current_dir(temp.path())
        .args(["show"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let document: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(document["name"], "Demo");
    let keys: Vec<&String> = document.as_object().unwrap().keys().collect();
    assert_eq!(keys.last().unwrap().as_str(), "icons");
}

#[test]
fn test_missing_config_reports_error() {
    let temp = TempDir::new().unwrap();

    pwa()
        .current_dir(temp.path())
        .args(["show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_status_runs_without_config() {
    let temp = TempDir::new().unwrap();

    pwa()
        .current_dir(temp.path())
        .args(["status"])
        .assert()
        .success();
}
