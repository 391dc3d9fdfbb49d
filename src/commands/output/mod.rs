//! Output renderers shared by the graph and traversal commands

pub mod human;
pub mod json;
pub mod records;
