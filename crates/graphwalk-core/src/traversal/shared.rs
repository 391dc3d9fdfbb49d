//! Helpers shared by the traversal algorithms

use crate::error::{GraphwalkError, Result};
use crate::graph::{Graph, VertexId};

use super::observer::StepObserver;
use super::types::{Algorithm, TraversalResult, TraversalStep};

/// Resolve the start name, mapping absence to `StartNotFound`
pub(crate) fn resolve_start(graph: &Graph, start: &str) -> Result<VertexId> {
    graph.find_by_name(start).ok_or_else(|| {
        tracing::debug!(start, "start vertex not found");
        GraphwalkError::StartNotFound {
            name: start.to_string(),
        }
    })
}

/// Resolve ids to names in the given order
pub(crate) fn snapshot<'a, I>(graph: &Graph, ids: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a VertexId>,
{
    ids.into_iter()
        .map(|id| graph.vertex_name(*id).to_string())
        .collect()
}

/// Report the visit that just appended the last entry of `order`.
///
/// `frontier` is only called, and the step only built, when the observer
/// wants steps.
pub(crate) fn emit_step<O, F>(graph: &Graph, observer: &mut O, order: &[VertexId], frontier: F)
where
    O: StepObserver,
    F: FnOnce() -> Option<Vec<String>>,
{
    let Some(&vertex) = order.last() else {
        return;
    };

    tracing::debug!(step = order.len(), vertex = graph.vertex_name(vertex), "visit");
    if !observer.wants_steps() {
        return;
    }

    let step = TraversalStep {
        step: order.len(),
        vertex: graph.vertex_name(vertex).to_string(),
        frontier: frontier(),
        visited_so_far: snapshot(graph, order),
    };
    observer.on_step(&step);
}

/// Package the visitation order as a result
pub(crate) fn finish(
    graph: &Graph,
    algorithm: Algorithm,
    start: &str,
    order: &[VertexId],
) -> TraversalResult {
    let result = TraversalResult {
        algorithm,
        start: start.to_string(),
        order: snapshot(graph, order),
    };
    tracing::info!(%algorithm, start, visited = result.len(), "traversal complete");
    result
}
