use std::collections::HashSet;

use crate::error::{GraphwalkError, Result};
use crate::graph::{Graph, VertexId};

use super::observer::StepObserver;
use super::shared::{emit_step, finish, resolve_start, snapshot};
use super::types::{Algorithm, TraversalOptions, TraversalResult};

#[derive(Default)]
struct DfsState {
    visited: HashSet<VertexId>,
    order: Vec<VertexId>,
}

/// Recursive pre-order depth-first traversal from `start`.
///
/// Call depth grows with the longest path explored; runs deeper than
/// `opts.max_recursion_depth` frames fail with `DepthLimitExceeded`.
/// Steps visited before the limit was hit have already been handed to
/// `observer` by then. Prefer [`dfs_iterative`] for large or untrusted
/// graphs.
#[tracing::instrument(skip(graph, opts, observer), fields(algorithm = "dfs-recursive"))]
pub fn dfs_recursive<O: StepObserver>(
    graph: &Graph,
    start: &str,
    opts: &TraversalOptions,
    observer: &mut O,
) -> Result<TraversalResult> {
    let root = resolve_start(graph, start)?;
    observer.on_start(Algorithm::DfsRecursive, start);

    let mut state = DfsState::default();
    if let Err(e) = visit(graph, root, 1, opts, &mut state, observer) {
        tracing::warn!(
            limit = opts.max_recursion_depth,
            visited = state.order.len(),
            "recursion depth limit reached"
        );
        return Err(e);
    }

    Ok(finish(graph, Algorithm::DfsRecursive, start, &state.order))
}

fn visit<O: StepObserver>(
    graph: &Graph,
    vertex: VertexId,
    depth: usize,
    opts: &TraversalOptions,
    state: &mut DfsState,
    observer: &mut O,
) -> Result<()> {
    if depth > opts.max_recursion_depth {
        return Err(GraphwalkError::DepthLimitExceeded {
            limit: opts.max_recursion_depth,
        });
    }

    state.visited.insert(vertex);
    state.order.push(vertex);
    emit_step(graph, observer, &state.order, || None);

    for neighbor in graph.neighbors_sorted(vertex) {
        if !state.visited.contains(&neighbor) {
            visit(graph, neighbor, depth + 1, opts, state, observer)?;
        }
    }

    Ok(())
}

/// Depth-first traversal from `start` using an explicit stack.
///
/// Vertices are marked when popped rather than when pushed, so the stack
/// may hold stale entries for vertices already visited; those are dropped
/// on pop. Neighbors are pushed in descending name order so the smallest
/// is popped first, giving the same order as [`dfs_recursive`].
#[tracing::instrument(skip(graph, observer), fields(algorithm = "dfs-iterative"))]
pub fn dfs_iterative<O: StepObserver>(
    graph: &Graph,
    start: &str,
    observer: &mut O,
) -> Result<TraversalResult> {
    let root = resolve_start(graph, start)?;
    observer.on_start(Algorithm::DfsIterative, start);

    let mut state = DfsState::default();
    let mut stack: Vec<VertexId> = vec![root];

    while let Some(current) = stack.pop() {
        if !state.visited.insert(current) {
            tracing::trace!(vertex = graph.vertex_name(current), "discard stale entry");
            continue;
        }

        state.order.push(current);
        emit_step(graph, observer, &state.order, || Some(snapshot(graph, &stack)));

        for neighbor in graph.neighbors_sorted(current).into_iter().rev() {
            if !state.visited.contains(&neighbor) {
                stack.push(neighbor);
            }
        }
    }

    Ok(finish(graph, Algorithm::DfsIterative, start, &state.order))
}
