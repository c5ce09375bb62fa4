//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use starpath_core::config::StarpathConfig;
use starpath_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: StarpathConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: StarpathConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("starpath {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Every optimal route between two bodies, five ways.");
        println!();
        println!("Run `starpath --help` for usage information.");
        Ok(())
    }
}
