//! Graph inspection commands (`show`, `neighbors`)

use graphwalk_core::error::Result;
use graphwalk_core::format::OutputFormat;
use graphwalk_core::records::{vertex_list, vertex_token};
use serde_json::json;

use super::dispatch::CommandContext;
use super::output::{human, json, records};

/// Print the adjacency structure
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let loaded = ctx.load_graph()?;

    match ctx.format() {
        OutputFormat::Human => human::print_structure(&loaded.graph),
        OutputFormat::Json => json::print(&json::graph_value(&loaded))?,
        OutputFormat::Records => {
            let mut lines = vec![records::header("show", &loaded)];
            lines.extend(records::adjacency_lines(&loaded));
            records::print(&lines);
        }
    }
    Ok(())
}

/// Print one vertex's neighbors, sorted, duplicates included
pub fn execute_neighbors(ctx: &CommandContext, vertex: &str) -> Result<()> {
    let loaded = ctx.load_graph()?;
    let graph = &loaded.graph;
    let id = graph.require(vertex)?;
    let neighbors = graph.names(&graph.neighbors_sorted(id));

    match ctx.format() {
        OutputFormat::Human => human::print_neighbors(vertex, &neighbors),
        OutputFormat::Json => json::print(&json!({
            "vertex": vertex,
            "degree": graph.degree(id),
            "neighbors": neighbors,
        }))?,
        OutputFormat::Records => {
            let lines = vec![
                records::header("neighbors", &loaded),
                format!(
                    "N {} neighbors={}",
                    vertex_token(vertex),
                    vertex_list(&neighbors)
                ),
            ];
            records::print(&lines);
        }
    }
    Ok(())
}
