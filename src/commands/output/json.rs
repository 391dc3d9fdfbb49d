//! JSON output

use graphwalk_core::error::GraphwalkError;
use graphwalk_core::graph::Graph;
use graphwalk_core::traversal::Algorithm;
use serde_json::{json, Value};

use crate::commands::dispatch::LoadedGraph;
use crate::commands::traverse::TraversalReport;

/// Graph summary plus adjacency rows
pub fn graph_value(loaded: &LoadedGraph) -> Value {
    let graph: &Graph = &loaded.graph;
    json!({
        "vertices": graph.vertex_count(),
        "edges": graph.edge_count(),
        "max_vertices": loaded.config.max_vertices,
        "rejected": loaded.rejected.iter().map(|e| e.to_string()).collect::<Vec<_>>(),
        "adjacency": graph.adjacency(),
    })
}

pub fn report_value(report: &TraversalReport) -> Value {
    json!({
        "algorithm": report.result.algorithm,
        "start": report.result.start,
        "order": report.result.order,
        "steps": report.steps,
    })
}

pub fn failure_value(algorithm: Algorithm, start: &str, error: &GraphwalkError) -> Value {
    json!({
        "algorithm": algorithm,
        "start": start,
        "error": error.to_json()["error"].clone(),
    })
}

pub fn print(value: &Value) -> graphwalk_core::error::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
