use crate::cli::support::{graphwalk, json_of, write_config};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Configuration file handling
// ============================================================================

#[test]
fn test_config_file_edges_and_start() {
    let dir = tempdir().unwrap();
    let path = write_config(
        dir.path(),
        r#"
start = "root"
edges = [["root", "left"], ["root", "right"], ["left", "deep"]]
"#,
    );

    graphwalk()
        .arg("--config")
        .arg(&path)
        .args(["--quiet", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BFS Result: [root, left, right, deep]"))
        .stdout(predicate::str::contains(
            "DFS Recursive Result: [root, left, deep, right]",
        ));
}

#[test]
fn test_config_from_environment() {
    let dir = tempdir().unwrap();
    let path = write_config(dir.path(), "start = \"E\"\n");

    graphwalk()
        .env("GRAPHWALK_CONFIG", &path)
        .args(["--quiet", "bfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BFS Result: [E, B, F, A, D, C]"));
}

#[test]
fn test_cli_overrides_config() {
    let dir = tempdir().unwrap();
    let path = write_config(dir.path(), "start = \"E\"\n");

    graphwalk()
        .arg("--config")
        .arg(&path)
        .args(["--quiet", "--start", "D", "bfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BFS Result: [D, B, A, E, C, F]"));
}

#[test]
fn test_isolated_vertices() {
    let dir = tempdir().unwrap();
    let path = write_config(dir.path(), "vertices = [\"Z\"]\n");

    let json = json_of(&["--config", path.to_str().unwrap(), "show"]);
    assert_eq!(json["vertices"], 7);
    assert_eq!(json["adjacency"][6]["vertex"], "Z");
    assert_eq!(json["adjacency"][6]["neighbors"], serde_json::json!([]));
}

#[test]
fn test_capacity_ignores_extra_vertices() {
    graphwalk()
        .args(["--max-vertices", "4", "--quiet", "bfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BFS Result: [A, B, C, D]"));

    graphwalk()
        .args(["--max-vertices", "4", "show"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "warning: graph is full (4 vertices), cannot add vertex E",
        ));
}

#[test]
fn test_capacity_json_reports_rejections() {
    let json = json_of(&["--max-vertices", "4", "show"]);
    assert_eq!(json["max_vertices"], 4);
    assert_eq!(json["vertices"], 4);
    assert_eq!(json["rejected"].as_array().unwrap().len(), 3);
}

#[test]
fn test_missing_config_file_fails() {
    let dir = tempdir().unwrap();
    graphwalk()
        .arg("--config")
        .arg(dir.path().join("nope.toml"))
        .arg("show")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read config"));
}

#[test]
fn test_malformed_config_fails() {
    let dir = tempdir().unwrap();
    let path = write_config(dir.path(), "edges = \"A-B\"\n");
    graphwalk()
        .arg("--config")
        .arg(&path)
        .arg("show")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}

#[test]
fn test_blank_vertex_name_is_usage_error() {
    let dir = tempdir().unwrap();
    let path = write_config(dir.path(), "edges = [[\"A\", \"\"]]\n");
    graphwalk()
        .arg("--config")
        .arg(&path)
        .arg("show")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid vertex name"));
}
