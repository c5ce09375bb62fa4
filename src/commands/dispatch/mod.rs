//! Command dispatch logic for starpath

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands::{info, search, vertices};
use starpath_core::config::StarpathConfig;
use starpath_core::error::Result;

mod command;

pub use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = StarpathConfig::resolve(cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), "resolve_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Search {
                graph,
                from,
                to,
                algorithm,
                tolerance,
                allow_negative_weights,
                require_path,
            } => search::execute(
                ctx,
                graph,
                &search::SearchRequest {
                    from,
                    to,
                    algorithm: *algorithm,
                    tolerance: *tolerance,
                    allow_negative_weights: *allow_negative_weights,
                    require_path: *require_path,
                },
            ),
            Commands::Info { graph } => info::execute(ctx, graph),
            Commands::Vertices {
                graph,
                by_category,
                ranked,
            } => vertices::execute(ctx, graph, *by_category, *ranked),
        }
    }
}
