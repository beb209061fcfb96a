//! CLI integration tests

use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

fn formcue_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_formcue"))
}

/// A command with config isolated to a temp directory and audio off
fn isolated_bin(config_home: &TempDir) -> Command {
    let mut cmd = formcue_bin();
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd.env("HOME", config_home.path());
    cmd
}

fn write_form(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write form file");
    path
}

const VALID_FORM: &str = r#"
[[field]]
id = "name"
label = "Your name"
required = true
value = "Ada"

[[field]]
id = "email"
type = "email"
required = true
value = "ada@example.com"
"#;

const INVALID_FORM: &str = r#"
[[field]]
id = "name"
label = "Your name"
required = true

[[field]]
id = "email"
type = "email"
value = "not-an-email"
"#;

#[test]
fn help_output() {
    formcue_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--field"))
        .stdout(predicate::str::contains("--no-audio"))
        .stdout(predicate::str::contains("--clips"));
}

#[test]
fn version_output() {
    formcue_bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("formcue"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_form_path_is_usage_error() {
    formcue_bin()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("form document"));
}

#[test]
fn valid_form_submits() {
    let dir = TempDir::new().unwrap();
    let form = write_form(&dir, "contact.toml", VALID_FORM);

    let output = isolated_bin(&dir)
        .arg(&form)
        .arg("--no-audio")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Form submitted with no validation errors!"));
}

#[test]
fn invalid_form_is_rejected_with_messages() {
    let dir = TempDir::new().unwrap();
    let form = write_form(&dir, "contact.toml", INVALID_FORM);

    let output = isolated_bin(&dir)
        .arg(&form)
        .arg("--no-audio")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please fill out this field."));
    assert!(stderr.contains("Please enter an email address."));
    assert!(stderr.contains("name"));
}

#[test]
fn blur_mode_validates_one_field() {
    let dir = TempDir::new().unwrap();
    let form = write_form(&dir, "contact.toml", INVALID_FORM);

    // The empty required name field fails...
    let output = isolated_bin(&dir)
        .arg(&form)
        .args(["--field", "name", "--no-audio"])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please fill out this field."));

    // ...while an unknown field is a usage error
    let output = isolated_bin(&dir)
        .arg(&form)
        .args(["--field", "missing", "--no-audio"])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn unmarked_form_is_skipped() {
    let dir = TempDir::new().unwrap();
    let form = write_form(
        &dir,
        "plain.toml",
        r#"
validate = false

[[field]]
id = "name"
required = true
"#,
    );

    let output = isolated_bin(&dir)
        .arg(&form)
        .arg("--no-audio")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not marked for validation"));
}

#[test]
fn unreadable_form_file_errors() {
    let dir = TempDir::new().unwrap();

    let output = isolated_bin(&dir)
        .arg(dir.path().join("nope.toml"))
        .arg("--no-audio")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read form file"));
}

#[test]
fn malformed_form_file_errors() {
    let dir = TempDir::new().unwrap();
    let form = write_form(&dir, "broken.toml", "[[field");

    let output = isolated_bin(&dir)
        .arg(&form)
        .arg("--no-audio")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse form file"));
}

#[test]
fn config_path_command() {
    let dir = TempDir::new().unwrap();
    let output = isolated_bin(&dir)
        .args(["config", "path"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("formcue"));
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_set_get_round_trip() {
    let dir = TempDir::new().unwrap();

    let output = isolated_bin(&dir)
        .args(["config", "set", "cue_style", "clip"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let output = isolated_bin(&dir)
        .args(["config", "get", "cue_style"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("clip"));
}

#[test]
fn config_get_unknown_key() {
    let dir = TempDir::new().unwrap();
    let output = isolated_bin(&dir)
        .args(["config", "get", "unknown_key"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown") || stderr.contains("Valid"),
        "Expected error about unknown key, got: {}",
        stderr
    );
}

#[test]
fn config_set_invalid_cue_style() {
    let dir = TempDir::new().unwrap();
    let output = isolated_bin(&dir)
        .args(["config", "set", "cue_style", "chime"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("synth") || stderr.contains("Invalid"),
        "Expected error about invalid cue style, got: {}",
        stderr
    );
}

#[test]
fn config_set_invalid_boolean() {
    let dir = TempDir::new().unwrap();
    let output = isolated_bin(&dir)
        .args(["config", "set", "audio", "maybe"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("true") || stderr.contains("false"),
        "Expected error about invalid boolean, got: {}",
        stderr
    );
}

#[test]
fn config_list_with_no_file() {
    let dir = TempDir::new().unwrap();
    let output = isolated_bin(&dir)
        .args(["config", "list"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("not set") || stdout.contains("audio"),
        "Expected config list output, got: {}",
        stdout
    );
}

#[test]
fn config_init_creates_file_once() {
    let dir = TempDir::new().unwrap();

    let output = isolated_bin(&dir)
        .args(["config", "init"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let output = isolated_bin(&dir)
        .args(["config", "init"])
        .output()
        .expect("Failed to execute command");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already exists"));
}
