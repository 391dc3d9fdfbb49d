//! Command dispatch logic for graphwalk

use std::time::Instant;

use graphwalk_core::error::Result;
use tracing::debug;

use crate::cli::{Cli, Commands};

mod command;

pub use command::{Command, CommandContext, LoadedGraph};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);
    debug!(elapsed = ?start.elapsed(), command = ?cli.command, "dispatch");

    match &cli.command {
        None => Commands::Demo.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match (self, self.algorithm()) {
            (_, Some(algorithm)) => super::traverse::execute(ctx, algorithm),
            (Commands::Show, None) => super::show::execute(ctx),
            (Commands::Neighbors { vertex }, None) => super::show::execute_neighbors(ctx, vertex),
            (_, None) => super::demo::execute(ctx),
        }
    }
}
