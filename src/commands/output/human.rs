//! Human-readable output: the live traversal trace and result lines

use graphwalk_core::error::GraphwalkError;
use graphwalk_core::format::{bracketed, SEPARATOR};
use graphwalk_core::graph::Graph;
use graphwalk_core::traversal::{
    Algorithm, FrontierKind, StepObserver, TraversalResult, TraversalStep,
};

/// Prints each step as it happens
pub struct HumanTrace {
    quiet: bool,
    frontier: Option<FrontierKind>,
}

impl HumanTrace {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            frontier: None,
        }
    }
}

impl StepObserver for HumanTrace {
    fn on_start(&mut self, algorithm: Algorithm, start: &str) {
        self.frontier = algorithm.frontier_kind();
        if !self.quiet {
            println!(
                "Starting {} traversal from vertex {}",
                algorithm.phrase(),
                start
            );
        }
    }

    fn on_step(&mut self, step: &TraversalStep) {
        if self.quiet {
            return;
        }

        println!("Visiting: {}", step.vertex);
        if let (Some(kind), Some(frontier)) = (self.frontier, &step.frontier) {
            println!("{}: {}", kind.label(), bracketed(frontier));
        }
        println!("Visited so far: {}", bracketed(&step.visited_so_far));
        println!("{}", SEPARATOR);
    }
}

/// Section heading used by the demo ("DFS Traversal (Recursive)")
pub fn heading(algorithm: Algorithm) -> &'static str {
    match algorithm {
        Algorithm::Bfs => "BFS Traversal",
        Algorithm::DfsRecursive => "DFS Traversal (Recursive)",
        Algorithm::DfsIterative => "DFS Traversal (Iterative)",
    }
}

pub fn print_heading(algorithm: Algorithm) {
    println!();
    println!("=== {} ===", heading(algorithm));
}

pub fn print_result(result: &TraversalResult) {
    println!(
        "{} Result: {}",
        result.algorithm.title(),
        bracketed(&result.order)
    );
}

/// Report a traversal that did not run
pub fn print_failure(algorithm: Algorithm, error: &GraphwalkError) {
    match error {
        GraphwalkError::StartNotFound { name } => {
            println!("Starting vertex not found: {}", name)
        }
        other => println!("{} failed: {}", algorithm.title(), other),
    }
}

pub fn print_structure(graph: &Graph) {
    println!();
    println!("Graph Structure:");
    println!("{}", SEPARATOR);
    for row in graph.adjacency() {
        println!("{} -> {}", row.vertex, bracketed(&row.neighbors));
    }
    println!("{}", SEPARATOR);
}

pub fn print_neighbors(vertex: &str, neighbors: &[String]) {
    println!("{} -> {}", vertex, bracketed(neighbors));
}
