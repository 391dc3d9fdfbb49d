use std::collections::{HashSet, VecDeque};

use crate::error::Result;
use crate::graph::{Graph, VertexId};

use super::observer::StepObserver;
use super::shared::{emit_step, finish, resolve_start, snapshot};
use super::types::{Algorithm, TraversalResult};

/// State tracked during BFS traversal
struct BfsState {
    visited: HashSet<VertexId>,
    queue: VecDeque<VertexId>,
    order: Vec<VertexId>,
}

impl BfsState {
    fn new(root: VertexId) -> Self {
        let mut state = Self {
            visited: HashSet::new(),
            queue: VecDeque::new(),
            order: Vec::new(),
        };
        state.visited.insert(root);
        state.queue.push_back(root);
        state
    }
}

/// Breadth-first traversal from `start`.
///
/// Vertices are marked when enqueued, so a vertex reachable from two
/// frontier members is queued once. Neighbors are enqueued in ascending
/// name order.
#[tracing::instrument(skip(graph, observer), fields(algorithm = "bfs"))]
pub fn bfs<O: StepObserver>(
    graph: &Graph,
    start: &str,
    observer: &mut O,
) -> Result<TraversalResult> {
    let root = resolve_start(graph, start)?;
    observer.on_start(Algorithm::Bfs, start);

    let mut state = BfsState::new(root);

    while let Some(current) = state.queue.pop_front() {
        state.order.push(current);
        emit_step(graph, observer, &state.order, || {
            Some(snapshot(graph, &state.queue))
        });

        for neighbor in graph.neighbors_sorted(current) {
            if state.visited.insert(neighbor) {
                state.queue.push_back(neighbor);
            }
        }
    }

    Ok(finish(graph, Algorithm::Bfs, start, &state.order))
}
