//! Demo command: graph structure followed by all three traversals

use graphwalk_core::error::Result;
use graphwalk_core::format::OutputFormat;
use graphwalk_core::traversal::Algorithm;
use serde_json::json;

use super::dispatch::CommandContext;
use super::output::{human, json, records};
use super::traverse::run_one;

/// Run every algorithm from the configured start.
///
/// A traversal that fails (typically because the start vertex does not
/// exist) is reported in place and the demo moves on to the next one.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let loaded = ctx.load_graph()?;
    let start = loaded.config.start.as_str();

    match ctx.format() {
        OutputFormat::Human => {
            if !ctx.quiet() {
                human::print_structure(&loaded.graph);
            }
            for algorithm in Algorithm::ALL {
                if !ctx.quiet() {
                    human::print_heading(algorithm);
                }
                match run_one(ctx, &loaded, algorithm) {
                    Ok(report) => human::print_result(&report.result),
                    Err(e) => {
                        tracing::warn!(%algorithm, error = %e, "traversal skipped");
                        human::print_failure(algorithm, &e);
                    }
                }
            }
        }
        OutputFormat::Json => {
            let traversals: Vec<_> = Algorithm::ALL
                .iter()
                .map(|&algorithm| match run_one(ctx, &loaded, algorithm) {
                    Ok(report) => json::report_value(&report),
                    Err(e) => {
                        tracing::warn!(%algorithm, error = %e, "traversal skipped");
                        json::failure_value(algorithm, start, &e)
                    }
                })
                .collect();

            json::print(&json!({
                "graph": json::graph_value(&loaded),
                "start": start,
                "traversals": traversals,
            }))?;
        }
        OutputFormat::Records => {
            let mut lines = vec![records::header("demo", &loaded)];
            lines.extend(records::adjacency_lines(&loaded));
            for algorithm in Algorithm::ALL {
                match run_one(ctx, &loaded, algorithm) {
                    Ok(report) => lines.extend(records::report_lines(&report)),
                    Err(e) => {
                        tracing::warn!(%algorithm, error = %e, "traversal skipped");
                        lines.push(records::failure_line(algorithm, &e));
                    }
                }
            }
            records::print(&lines);
        }
    }

    graphwalk_core::trace_time!(ctx.start, "demo");
    Ok(())
}
