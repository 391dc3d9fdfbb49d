use crate::cli::support::{graphwalk, json_of, stdout_of, write_config};
use predicates::prelude::*;
use std::time::{Duration, Instant};
use tempfile::tempdir;

// ============================================================================
// Single traversal commands
// ============================================================================

#[test]
fn test_bfs_command() {
    graphwalk()
        .arg("bfs")
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting BFS traversal from vertex A"))
        .stdout(predicate::str::contains("BFS Result: [A, B, C, D, E, F]"))
        .stdout(predicate::str::contains("DFS").not());
}

#[test]
fn test_dfs_defaults_to_iterative() {
    graphwalk()
        .arg("dfs")
        .assert()
        .success()
        .stdout(predicate::str::contains("Stack:"))
        .stdout(predicate::str::contains(
            "DFS Iterative Result: [A, B, D, E, F, C]",
        ));
}

#[test]
fn test_dfs_recursive_has_no_frontier_line() {
    graphwalk()
        .args(["dfs", "--recursive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stack:").not())
        .stdout(predicate::str::contains("Queue:").not())
        .stdout(predicate::str::contains(
            "DFS Recursive Result: [A, B, D, E, F, C]",
        ));
}

#[test]
fn test_traverse_by_name() {
    let stdout = stdout_of(&["--quiet", "traverse", "dfs-recursive"]);
    assert_eq!(stdout.trim(), "DFS Recursive Result: [A, B, D, E, F, C]");
}

#[test]
fn test_traverse_from_other_start() {
    let stdout = stdout_of(&["--quiet", "--start", "F", "bfs"]);
    assert_eq!(stdout.trim(), "BFS Result: [F, C, E, A, B, D]");
}

#[test]
fn test_unknown_algorithm_exit_code_2() {
    graphwalk()
        .args(["traverse", "dijkstra"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown algorithm"));
}

#[test]
fn test_missing_start_exit_code_3() {
    graphwalk()
        .args(["--start", "nonexistent-vertex", "bfs"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "starting vertex not found: nonexistent-vertex",
        ));
}

#[test]
fn test_missing_start_json_error_envelope() {
    let output = graphwalk()
        .args(["--format", "json", "--start", "Q", "dfs"])
        .assert()
        .code(3)
        .get_output()
        .clone();
    assert!(output.stdout.is_empty());

    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "start_not_found");
    assert_eq!(err["error"]["code"], 3);
}

#[test]
fn test_traverse_json() {
    let json = json_of(&["bfs"]);
    assert_eq!(json["algorithm"], "bfs");
    assert_eq!(json["start"], "A");
    let steps = json["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 6);
    assert_eq!(steps[1]["vertex"], "B");
    assert_eq!(steps[1]["frontier"], serde_json::json!(["C"]));
    assert_eq!(steps[1]["visited_so_far"], serde_json::json!(["A", "B"]));
}

#[test]
fn test_traverse_records() {
    let stdout = stdout_of(&["--format", "records", "dfs"]);
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].starts_with("H graphwalk=1 records=1 mode=traverse"));
    assert_eq!(lines[1], "T dfs-iterative start=A");
    assert_eq!(
        lines[3],
        "S dfs-iterative step=2 vertex=B frontier=C visited=A,B"
    );
    assert_eq!(lines.last(), Some(&"R dfs-iterative order=A,B,D,E,F,C"));
}

#[test]
fn test_custom_edges() {
    let stdout = stdout_of(&[
        "--quiet", "--edge", "hub,b", "--edge", "hub,a", "--edge", "a,leaf", "--start", "hub",
        "bfs",
    ]);
    assert_eq!(stdout.trim(), "BFS Result: [hub, a, b, leaf]");
}

#[test]
fn test_unreachable_vertices_omitted() {
    let stdout = stdout_of(&[
        "--quiet", "--edge", "A,B", "--edge", "C,D", "dfs",
    ]);
    assert_eq!(stdout.trim(), "DFS Iterative Result: [A, B]");
}

#[test]
fn test_step_delay_paces_human_output() {
    let started = Instant::now();
    graphwalk()
        .args(["--delay-ms", "40", "bfs"])
        .assert()
        .success();
    assert!(started.elapsed() >= Duration::from_millis(240));
}

#[test]
fn test_recursion_depth_limit() {
    graphwalk()
        .args([
            "--edge", "A,B", "--edge", "B,C", "--edge", "C,D", "--max-depth", "2", "dfs",
            "--recursive",
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("recursion depth limit of 2 exceeded"));
}

#[test]
fn test_recursive_dfs_at_default_depth() {
    let dir = tempdir().unwrap();
    let edges: Vec<String> = (1..1000)
        .map(|i| format!("[\"n{}\", \"n{}\"]", i, i + 1))
        .collect();
    let path = write_config(
        dir.path(),
        &format!("start = \"n1\"\nedges = [{}]\n", edges.join(", ")),
    );

    let output = graphwalk()
        .args(["--config", path.to_str().unwrap(), "--format", "records", "dfs", "--recursive"])
        .assert()
        .success()
        .get_output()
        .clone();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.lines().any(|l| l.starts_with("R ") && l.ends_with(",n1000")));
}

#[test]
fn test_max_depth_above_default_rejected() {
    graphwalk()
        .args(["--max-depth", "100000", "dfs", "--recursive"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid max_recursion_depth"));
}
