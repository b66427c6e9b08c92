//! CLI integration tests
//!
//! These tests run the built binary and verify:
//! - Command parsing
//! - Manifest files written to disk
//! - Overwrite protection
//! - Exit codes

use packfile::Manifest;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn packfile_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_packfile"));
    cmd.env_remove("RUST_LOG")
        .env_remove("PACKFILE_MANIFEST_NAME")
        .env_remove("PACKFILE_CATCHALL_THRESHOLD")
        .env_remove("PACKFILE_MAX_LICENSE_BYTES")
        .env_remove("PACKFILE_LOG_LEVEL")
        .env_remove("PACKFILE_LOG_JSON");
    cmd
}

fn run(args: &[&str]) -> Output {
    packfile_cmd()
        .args(args)
        .output()
        .expect("Failed to execute packfile")
}

/// Creates a small model repository
fn create_model_repo(dir: &TempDir) -> &Path {
    let root = dir.path();
    fs::write(root.join("model.gguf"), vec![0u8; 1024]).unwrap();
    fs::write(root.join("README.md"), "# Model").unwrap();
    fs::create_dir_all(root.join("data")).unwrap();
    fs::write(root.join("data/eval.csv"), "a,b").unwrap();
    root
}

#[test]
fn test_cli_help() {
    let output = run(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("packfile"));
    assert!(stdout.contains("init"));
}

#[test]
fn test_cli_version() {
    let output = run(&["--version"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_init_writes_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let root = create_model_repo(&temp_dir);

    let output = run(&[
        "init",
        root.to_str().unwrap(),
        "--name",
        "tiny",
        "--author",
        "Jane Doe",
    ]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let written = fs::read_to_string(root.join("Packfile")).unwrap();
    let manifest = Manifest::from_yaml(&written).unwrap();

    assert_eq!(manifest.package.name.as_deref(), Some("tiny"));
    assert_eq!(manifest.package.authors, vec!["Jane Doe"]);
    assert_eq!(manifest.model.unwrap().path, "model.gguf");
    assert_eq!(manifest.datasets[0].path, "data");
}

#[test]
fn test_init_refuses_to_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let root = create_model_repo(&temp_dir);
    fs::write(root.join("Packfile"), "existing").unwrap();

    let output = run(&["init", root.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(fs::read_to_string(root.join("Packfile")).unwrap(), "existing");
}

#[test]
fn test_init_force_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let root = create_model_repo(&temp_dir);
    fs::write(root.join("Packfile"), "existing").unwrap();

    let output = run(&["init", root.to_str().unwrap(), "--force"]);

    assert!(output.status.success());
    let written = fs::read_to_string(root.join("Packfile")).unwrap();
    assert!(written.starts_with("manifestVersion:"));
}

#[test]
fn test_init_stdout_json() {
    let temp_dir = TempDir::new().unwrap();
    let root = create_model_repo(&temp_dir);

    let output = run(&[
        "-q",
        "init",
        root.to_str().unwrap(),
        "--format",
        "json",
        "--stdout",
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["manifestVersion"], "1.0.0");
    assert_eq!(value["model"]["name"], "model");
    assert!(!root.join("Packfile.json").exists());
    assert!(!root.join("Packfile").exists());
}

#[test]
fn test_init_json_file_name() {
    let temp_dir = TempDir::new().unwrap();
    let root = create_model_repo(&temp_dir);

    let output = run(&["init", root.to_str().unwrap(), "--format", "json"]);

    assert!(output.status.success());
    assert!(root.join("Packfile.json").exists());
}

#[test]
fn test_custom_manifest_name() {
    let temp_dir = TempDir::new().unwrap();
    let root = create_model_repo(&temp_dir);

    let output = packfile_cmd()
        .args(["init", root.to_str().unwrap()])
        .env("PACKFILE_MANIFEST_NAME", "ArtifactManifest")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(root.join("ArtifactManifest").exists());
}

#[test]
fn test_init_missing_path() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");

    let output = run(&["init", missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let root = create_model_repo(&temp_dir);

    let output = packfile_cmd()
        .args(["init", root.to_str().unwrap()])
        .env("PACKFILE_MAX_LICENSE_BYTES", "0")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(!root.join("Packfile").exists());
}

#[test]
fn test_init_requires_path() {
    let output = run(&["init"]);
    assert!(!output.status.success());
}

#[test]
fn test_init_logs_rendered_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let root = create_model_repo(&temp_dir);

    let output = run(&["init", root.to_str().unwrap()]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let generated = stderr.find("Generated manifest").expect("manifest logged");
    let saved = stderr.find("Manifest saved to").expect("save logged");
    assert!(generated < saved);
    assert!(stderr.contains("manifestVersion"));
}

#[test]
fn test_json_logging_from_env() {
    let temp_dir = TempDir::new().unwrap();
    let root = create_model_repo(&temp_dir);

    let output = packfile_cmd()
        .args(["init", root.to_str().unwrap(), "--stdout"])
        .env("PACKFILE_LOG_JSON", "true")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    assert!(!lines.is_empty());
    for line in lines {
        let value: serde_json::Value = serde_json::from_str(line)
            .unwrap_or_else(|e| panic!("log line is not JSON ({}): {}", e, line));
        assert!(value.get("level").is_some());
    }
}
