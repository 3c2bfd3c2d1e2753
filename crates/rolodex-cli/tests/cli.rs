use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;

#[test]
fn create_without_identity_fails_before_any_script() {
    let output = cargo_bin_cmd!("rolodex")
        .args(["create", "--email", "ada@example.com"])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("invalid input"), "stderr: {stderr}");
}

#[test]
fn update_without_fields_is_a_noop() {
    let output = cargo_bin_cmd!("rolodex")
        .args(["update", "some-id"])
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {output:?}");
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("no update applied"), "stdout: {stdout}");
}

#[test]
fn update_without_fields_reports_json_failure_flag() {
    let output = cargo_bin_cmd!("rolodex")
        .args(["--json", "update", "some-id"])
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {output:?}");
    let value: Value = serde_json::from_slice(&output.stdout).expect("parse json");
    assert_eq!(value["success"], Value::Bool(false));
}

#[test]
fn lookup_without_digits_reports_unknown() {
    let output = cargo_bin_cmd!("rolodex")
        .args(["lookup", "no digits here"])
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {output:?}");
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert_eq!(stdout.trim(), "Unknown");
}

#[test]
fn completions_generate_for_bash() {
    let output = cargo_bin_cmd!("rolodex")
        .args(["completions", "bash"])
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {output:?}");
    assert!(!output.stdout.is_empty());
}
