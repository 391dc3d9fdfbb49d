//! Command implementations for graphwalk

pub mod demo;
pub mod dispatch;
pub mod output;
pub mod show;
pub mod traverse;
