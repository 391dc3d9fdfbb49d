use crate::cli::support::graphwalk;
use predicates::prelude::*;

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_log_level_debug_shows_debug_messages() {
    graphwalk()
        .args(["--log-level", "debug", "show"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_level_warn_hides_debug_messages() {
    graphwalk()
        .args(["--log-level", "warn", "show"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_shows_core_events() {
    graphwalk()
        .args(["--verbose", "bfs"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("graph_built"))
        .stderr(predicate::str::contains("visit"));
}

#[test]
fn test_logs_do_not_touch_stdout() {
    graphwalk()
        .args(["--verbose", "--quiet", "bfs"])
        .assert()
        .success()
        .stdout(predicate::str::diff("BFS Result: [A, B, C, D, E, F]\n"));
}

#[test]
fn test_log_json() {
    graphwalk()
        .args(["--log-level", "debug", "--log-json", "show"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"level\":\"DEBUG\""));
}

#[test]
fn test_env_filter_override() {
    graphwalk()
        .env("GRAPHWALK_LOG", "graphwalk_core=info")
        .arg("bfs")
        .assert()
        .success()
        .stderr(predicate::str::contains("traversal complete"))
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_demo_missing_start_logs_warning() {
    graphwalk()
        .args(["--start", "Z", "demo"])
        .assert()
        .success()
        .stderr(predicate::str::contains("traversal skipped"));
}
