// src/cli/dispatch.rs
//! Command dispatch logic extracted from binary to keep main small.

use super::args::Commands;
use super::handlers::{handle_check, handle_init, handle_run};
use crate::exit::RankExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands) -> Result<RankExit> {
    match command {
        Commands::Run(args) => handle_run(&args),
        Commands::Check { config } => handle_check(config.as_deref()),
        Commands::Init { path, force } => handle_init(&path, force),
    }
}
