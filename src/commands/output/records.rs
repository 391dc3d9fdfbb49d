//! Records output
//!
//! ```text
//! H graphwalk=1 records=1 mode=demo vertices=6 edges=6 start=A
//! G A neighbors=B,C
//! T bfs start=A
//! S bfs step=1 vertex=A frontier=- visited=A
//! R bfs order=A,B,C,D,E,F
//! E bfs type=start_not_found "starting vertex not found: Z"
//! ```

use graphwalk_core::error::GraphwalkError;
use graphwalk_core::records::{escape_quotes, vertex_list, vertex_token};
use graphwalk_core::traversal::{Algorithm, TraversalStep};

use crate::commands::dispatch::LoadedGraph;
use crate::commands::traverse::TraversalReport;

pub fn header(mode: &str, loaded: &LoadedGraph) -> String {
    format!(
        "H graphwalk=1 records=1 mode={} vertices={} edges={} start={}",
        mode,
        loaded.graph.vertex_count(),
        loaded.graph.edge_count(),
        vertex_token(&loaded.config.start)
    )
}

pub fn adjacency_lines(loaded: &LoadedGraph) -> Vec<String> {
    loaded
        .graph
        .adjacency()
        .iter()
        .map(|row| {
            format!(
                "G {} neighbors={}",
                vertex_token(&row.vertex),
                vertex_list(&row.neighbors)
            )
        })
        .collect()
}

fn step_line(algorithm: Algorithm, step: &TraversalStep) -> String {
    let frontier = step
        .frontier
        .as_ref()
        .map(|f| format!(" frontier={}", vertex_list(f)))
        .unwrap_or_default();
    format!(
        "S {} step={} vertex={}{} visited={}",
        algorithm,
        step.step,
        vertex_token(&step.vertex),
        frontier,
        vertex_list(&step.visited_so_far)
    )
}

pub fn report_lines(report: &TraversalReport) -> Vec<String> {
    let algorithm = report.result.algorithm;
    let mut lines = vec![format!(
        "T {} start={}",
        algorithm,
        vertex_token(&report.result.start)
    )];
    lines.extend(report.steps.iter().map(|s| step_line(algorithm, s)));
    lines.push(format!(
        "R {} order={}",
        algorithm,
        vertex_list(&report.result.order)
    ));
    lines
}

pub fn failure_line(algorithm: Algorithm, error: &GraphwalkError) -> String {
    format!(
        "E {} type={} \"{}\"",
        algorithm,
        error.error_type(),
        escape_quotes(&error.to_string())
    )
}

pub fn print(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
