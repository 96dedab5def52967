//! Integration tests for the lintset CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn lintset(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("lintset").unwrap();
    // keep auto-discovery away from any preset files outside the sandbox
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn test_rules_lists_the_default_catalog() {
    let dir = TempDir::new().unwrap();

    lintset(&dir)
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("no-duplicate-super"))
        .stdout(predicate::str::contains("react-hooks-nesting"))
        .stdout(predicate::str::contains("rules"));
}

#[test]
fn test_rules_severity_filter() {
    let dir = TempDir::new().unwrap();

    lintset(&dir)
        .args(["rules", "--severity", "error"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no-duplicate-super"))
        // "no-eval" is off in the catalog, so the error filter drops it
        .stdout(predicate::str::contains("no-eval").not());
}

#[test]
fn test_show_emits_valid_json() {
    let dir = TempDir::new().unwrap();

    let assert = lintset(&dir).args(["show", "--format", "json"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["rules"]["no-eval"]["severity"], "off");
    assert_eq!(value["plugins"][0], "react-hooks");
}

#[test]
fn test_show_js_rules_table() {
    let dir = TempDir::new().unwrap();

    let assert = lintset(&dir)
        .args(["show", "--js-rules", "--format", "json"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["object-literal-key-quotes"]["severity"], "error");
    assert_eq!(value["object-literal-key-quotes"]["options"], "always");
}

#[test]
fn test_export_writes_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("resolved.json");

    lintset(&dir)
        .args(["export", out.to_str().unwrap()])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert!(value["rules"].as_object().unwrap().len() > 100);
}

#[test]
fn test_config_file_drives_resolution() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("team.json");
    fs::write(
        &config,
        r#"{
            "extends": ["strict"],
            "rules": { "no-floating-promises": "error" }
        }"#,
    )
    .unwrap();

    let assert = lintset(&dir)
        .args(["--config", config.to_str().unwrap(), "show"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    // local override wins over the strict table's "warn"
    assert_eq!(value["rules"]["no-floating-promises"]["severity"], "error");
    // only "strict" was extended, so the recommended table is absent
    assert!(value["rules"]["no-eval"].is_null());
}

#[test]
fn test_unknown_ruleset_reference_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("broken.json");
    fs::write(&config, r#"{ "extends": ["no-such-ruleset"] }"#).unwrap();

    lintset(&dir)
        .args(["--config", config.to_str().unwrap(), "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown ruleset"));
}
