//! Graphwalk Core Library
//!
//! Named-vertex undirected graphs and three classic traversals over them
//! (breadth-first, recursive depth-first, iterative depth-first), each
//! reporting its progress step by step.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod records;
pub mod traversal;
