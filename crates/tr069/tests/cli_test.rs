//! Integration tests for the `tr069` CLI binary.
//!
//! Every command runs against a throwaway HOME so tests never touch the
//! user's real configuration.
#![allow(clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

const DEVICE_XML: &str = r#"<Device>
  <IPsec>
    <Enable>true</Enable>
    <Filter instance="1"><Order>1</Order><ProcessingChoice>Protect</ProcessingChoice></Filter>
    <Filter instance="2"><Order>2</Order><ProcessingChoice>Bypass</ProcessingChoice></Filter>
  </IPsec>
</Device>
"#;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `tr069` binary with env isolation.
fn tr069_cmd(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("tr069");
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("TR069_OUTPUT")
        .env_remove("TR069_DEFAULTS_OUTPUT")
        .env_remove("TR069_DEFAULTS_COLOR")
        .env_remove("TR069_DEFAULTS_INDENT")
        .env_remove("RUST_LOG");
    cmd
}

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn config_file(home: &TempDir) -> PathBuf {
    home.path().join(".config").join("tr069").join("config.toml")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let home = TempDir::new().unwrap();
    let output = tr069_cmd(&home).output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_lists_commands() {
    let home = TempDir::new().unwrap();
    tr069_cmd(&home).arg("--help").assert().success().stdout(
        predicate::str::contains("convert")
            .and(predicate::str::contains("template"))
            .and(predicate::str::contains("summary"))
            .and(predicate::str::contains("config")),
    );
}

#[test]
fn test_version_flag() {
    let home = TempDir::new().unwrap();
    tr069_cmd(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tr069"));
}

#[test]
fn test_completions_zsh() {
    let home = TempDir::new().unwrap();
    tr069_cmd(&home)
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_invalid_output_format() {
    let home = TempDir::new().unwrap();
    let output = tr069_cmd(&home)
        .args(["--output", "csv", "template", "device"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(text.contains("possible values"), "{text}");
}

// ── template ────────────────────────────────────────────────────────

#[test]
fn test_template_device_xml() {
    let home = TempDir::new().unwrap();
    tr069_cmd(&home)
        .args(["template", "device"])
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("<Device>")
                .and(predicate::str::contains(r#"<Filter instance="1""#))
                .and(predicate::str::contains("<ChildSA instance=\"1\">")),
        );
}

#[test]
fn test_template_json_from_output_flag() {
    let home = TempDir::new().unwrap();
    let output = tr069_cmd(&home)
        .args(["-o", "json-compact", "template", "fap-service"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value["FAPService"]["CellConfig"]["UMTS"]["RAN"]["RRCTimers"].is_object());
}

#[test]
fn test_template_uses_config_default_output() {
    let home = TempDir::new().unwrap();
    let cfg = config_file(&home);
    std::fs::create_dir_all(cfg.parent().unwrap()).unwrap();
    std::fs::write(&cfg, "[defaults]\noutput = \"yaml\"\n").unwrap();

    tr069_cmd(&home)
        .args(["template", "stb-service"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("STBService:"));
}

#[test]
fn test_broken_config_exits_with_config_code() {
    let home = TempDir::new().unwrap();
    tr069_cmd(&home)
        .env("TR069_DEFAULTS_OUTPUT", "csv")
        .args(["template", "device"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("defaults.output"));
}

// ── convert ─────────────────────────────────────────────────────────

#[test]
fn test_convert_xml_to_json() {
    let home = TempDir::new().unwrap();
    let input = write_file(&home, "cpe.xml", DEVICE_XML);
    let output = tr069_cmd(&home)
        .args(["convert", "--to", "json"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["Device"]["IPsec"]["Filter"][1]["ProcessingChoice"], "Bypass");
}

#[test]
fn test_convert_round_trip_through_file() {
    let home = TempDir::new().unwrap();
    let input = write_file(&home, "cpe.xml", DEVICE_XML);
    let yaml = home.path().join("cpe.yaml");

    tr069_cmd(&home)
        .args(["convert", "--to", "yaml", "--out"])
        .arg(&yaml)
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    tr069_cmd(&home)
        .args(["convert", "--to", "xml"])
        .arg(&yaml)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"<Filter instance="2">"#));
}

#[test]
fn test_convert_stdin_requires_from() {
    let home = TempDir::new().unwrap();
    tr069_cmd(&home)
        .args(["convert", "-"])
        .write_stdin(DEVICE_XML)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--from"));
}

#[test]
fn test_convert_stdin_with_from() {
    let home = TempDir::new().unwrap();
    tr069_cmd(&home)
        .args(["-o", "yaml", "convert", "--from", "xml", "-"])
        .write_stdin(DEVICE_XML)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Device:"));
}

#[test]
fn test_convert_bare_object_with_model() {
    let home = TempDir::new().unwrap();
    let input = write_file(&home, "stb.json", r#"{"@instance": 1, "Enable": true}"#);
    tr069_cmd(&home)
        .args(["convert", "--model", "stb-service", "--to", "xml"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"<STBService instance="1">"#));
}

#[test]
fn test_convert_missing_file() {
    let home = TempDir::new().unwrap();
    tr069_cmd(&home)
        .args(["convert", "does-not-exist.xml"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_convert_unknown_extension() {
    let home = TempDir::new().unwrap();
    let input = write_file(&home, "cpe.txt", DEVICE_XML);
    tr069_cmd(&home).arg("convert").arg(&input).assert().code(2);
}

#[test]
fn test_convert_invalid_document() {
    let home = TempDir::new().unwrap();
    let input = write_file(&home, "bad.xml", "<Device><IPsec><Status>Sideways</Status></IPsec></Device>");
    tr069_cmd(&home)
        .arg("convert")
        .arg(&input)
        .assert()
        .code(5)
        .stderr(predicate::str::contains("not a valid"));
}

// ── summary ─────────────────────────────────────────────────────────

#[test]
fn test_summary_table() {
    let home = TempDir::new().unwrap();
    let input = write_file(&home, "cpe.xml", DEVICE_XML);
    tr069_cmd(&home)
        .arg("summary")
        .arg(&input)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Object")
                .and(predicate::str::contains("Device.IPsec.Filter.{i}."))
                .and(predicate::str::contains("2")),
        );
}

#[test]
fn test_summary_json() {
    let home = TempDir::new().unwrap();
    let input = write_file(&home, "cpe.xml", DEVICE_XML);
    let output = tr069_cmd(&home)
        .args(["-o", "json", "summary"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[2]["object"], "Device.IPsec.Filter.{i}.");
    assert_eq!(value[2]["instances"], 2);
}

#[test]
fn test_summary_rejects_xml_output() {
    let home = TempDir::new().unwrap();
    let input = write_file(&home, "cpe.xml", DEVICE_XML);
    tr069_cmd(&home)
        .args(["-o", "xml", "summary"])
        .arg(&input)
        .assert()
        .code(2);
}

#[test]
fn test_quiet_suppresses_output() {
    let home = TempDir::new().unwrap();
    tr069_cmd(&home)
        .args(["--quiet", "template", "device"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// ── config ──────────────────────────────────────────────────────────

#[test]
fn test_config_path_points_into_home() {
    let home = TempDir::new().unwrap();
    let output = tr069_cmd(&home).args(["config", "path"]).output().unwrap();
    assert!(output.status.success());
    let printed = String::from_utf8_lossy(&output.stdout);
    assert_eq!(Path::new(printed.trim()), config_file(&home));
}

#[test]
fn test_config_show_no_config() {
    let home = TempDir::new().unwrap();
    tr069_cmd(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[defaults]"));
}

#[test]
fn test_config_init_refuses_to_overwrite() {
    let home = TempDir::new().unwrap();
    tr069_cmd(&home).args(["config", "init"]).assert().success();
    assert!(config_file(&home).is_file());

    tr069_cmd(&home)
        .args(["config", "init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    tr069_cmd(&home)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_summary_tables_only() {
    let home = TempDir::new().unwrap();
    let input = write_file(&home, "cpe.xml", DEVICE_XML);
    let output = tr069_cmd(&home)
        .args(["-o", "json-compact", "summary", "--tables"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        r#"[{"object":"Device.IPsec.Filter.{i}.","instances":2}]"#
    );
}

// ── man ─────────────────────────────────────────────────────────────

#[test]
fn test_man_prints_top_level_page() {
    let home = TempDir::new().unwrap();
    tr069_cmd(&home)
        .arg("man")
        .assert()
        .success()
        .stdout(predicate::str::contains(".TH").and(predicate::str::contains("convert")));
}

#[test]
fn test_man_prints_nested_command_page() {
    let home = TempDir::new().unwrap();
    tr069_cmd(&home)
        .args(["man", "config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Overwrite an existing file"));
}

#[test]
fn test_man_unknown_command() {
    let home = TempDir::new().unwrap();
    tr069_cmd(&home)
        .args(["man", "frobnicate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("frobnicate"));
}
