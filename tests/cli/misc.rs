use crate::cli::support::graphwalk;
use predicates::prelude::*;

// ============================================================================
// Help, version, and usage errors
// ============================================================================

#[test]
fn test_help_flag() {
    graphwalk()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: graphwalk"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("traverse"))
        .stdout(predicate::str::contains("neighbors"));
}

#[test]
fn test_version_flag() {
    graphwalk()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("graphwalk"));
}

#[test]
fn test_subcommand_help() {
    graphwalk()
        .args(["traverse", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Run a single traversal"));
}

#[test]
fn test_unknown_format_exit_code_2() {
    graphwalk()
        .args(["--format", "invalid", "show"])
        .assert()
        .code(2);
}

#[test]
fn test_malformed_edge_exit_code_2() {
    graphwalk()
        .args(["--edge", "AB", "show"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid edge"));
}

#[test]
fn test_usage_error_json_envelope() {
    let output = graphwalk()
        .args(["--format", "json", "traverse", "astar"])
        .assert()
        .code(2)
        .get_output()
        .clone();
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "usage_error");
}

#[test]
fn test_usage_error_json_envelope_uppercase_format() {
    let output = graphwalk()
        .args(["--format", "JSON", "traverse", "astar"])
        .assert()
        .code(2)
        .get_output()
        .clone();
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["code"], 2);
    assert_eq!(err["error"]["type"], "usage_error");
}
