use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for graphwalk with no configuration leaking in from the
/// environment
pub fn graphwalk() -> Command {
    let mut cmd = cargo_bin_cmd!("graphwalk");
    cmd.env_remove("GRAPHWALK_CONFIG")
        .env_remove("GRAPHWALK_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a config file into `dir` and return its path
pub fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("graph.toml");
    fs::write(&path, contents).unwrap();
    path
}

/// Run graphwalk and return stdout as a String, asserting success
pub fn stdout_of(args: &[&str]) -> String {
    let output = graphwalk().args(args).assert().success().get_output().clone();
    String::from_utf8(output.stdout).unwrap()
}

/// Run graphwalk with `--format json` and parse stdout
pub fn json_of(args: &[&str]) -> serde_json::Value {
    let mut full = vec!["--format", "json"];
    full.extend_from_slice(args);
    serde_json::from_str(&stdout_of(&full)).unwrap()
}
