//! Single-traversal commands (`traverse`, `bfs`, `dfs`)

use graphwalk_core::error::Result;
use graphwalk_core::format::OutputFormat;
use graphwalk_core::traversal::{
    traverse, Algorithm, Paced, StepRecorder, TraversalResult, TraversalStep,
};

use super::dispatch::{CommandContext, LoadedGraph};
use super::output::{human, json, records};

/// Outcome of one traversal plus the steps recorded for structured output
pub struct TraversalReport {
    pub result: TraversalResult,
    /// Empty for human output, which streams steps instead
    pub steps: Vec<TraversalStep>,
}

/// Run one algorithm over the loaded graph.
///
/// Human output streams the trace through a paced observer; the structured
/// formats record steps without pausing and render them afterwards.
pub fn run_one(
    ctx: &CommandContext,
    loaded: &LoadedGraph,
    algorithm: Algorithm,
) -> Result<TraversalReport> {
    let opts = loaded.config.traversal_options();
    let start = loaded.config.start.as_str();

    match ctx.format() {
        OutputFormat::Human => {
            let mut observer = Paced::new(
                human::HumanTrace::new(ctx.quiet()),
                loaded.config.step_delay(),
            );
            let result = traverse(&loaded.graph, algorithm, start, &opts, &mut observer)?;
            Ok(TraversalReport {
                result,
                steps: Vec::new(),
            })
        }
        OutputFormat::Json | OutputFormat::Records => {
            let mut recorder = StepRecorder::new();
            let result = traverse(&loaded.graph, algorithm, start, &opts, &mut recorder)?;
            Ok(TraversalReport {
                result,
                steps: recorder.into_steps(),
            })
        }
    }
}

/// Execute a single traversal; a missing start vertex is an error here
pub fn execute(ctx: &CommandContext, algorithm: Algorithm) -> Result<()> {
    let loaded = ctx.load_graph()?;
    let report = run_one(ctx, &loaded, algorithm)?;

    match ctx.format() {
        OutputFormat::Human => human::print_result(&report.result),
        OutputFormat::Json => json::print(&json::report_value(&report))?,
        OutputFormat::Records => {
            let mut lines = vec![records::header("traverse", &loaded)];
            lines.extend(records::report_lines(&report));
            records::print(&lines);
        }
    }

    graphwalk_core::trace_time!(ctx.start, "traverse", algorithm = algorithm.title());
    Ok(())
}
