// src/cli/handlers.rs
use anyhow::{bail, Result};
use colored::Colorize;
use std::path::Path;

use crate::cli::args::RunArgs;
use crate::config::Config;
use crate::exit::RankExit;
use crate::rank::{self, RankTable};
use crate::reporting::{self, ConsoleSink, FinalReport, JsonSink};

/// Handles the run command.
///
/// # Errors
/// Returns error if the configuration is invalid or estimation fails.
pub fn handle_run(args: &RunArgs) -> Result<RankExit> {
    let mut config = Config::load(args.config.as_deref())?;
    args.apply(&mut config.params);
    let network = config.network()?;
    let mut table = RankTable::init(&network);

    if args.json {
        let mut sink = JsonSink::stdout();
        let summary = rank::run(&network, &mut table, &config.params, &mut sink)?;
        println!("{}", FinalReport::new(summary, &table).to_json()?);
    } else {
        let mut sink = ConsoleSink::stdout(args.quiet);
        let summary = rank::run(&network, &mut table, &config.params, &mut sink)?;
        reporting::print_summary(&summary, &table);
    }
    Ok(RankExit::Success)
}

/// Handles the check command.
///
/// # Errors
/// Returns error if the configuration cannot be loaded or fails validation.
pub fn handle_check(path: Option<&Path>) -> Result<RankExit> {
    let config = Config::load(path)?;
    let (network, warnings) = config.validate()?;
    reporting::print_warnings(&warnings);

    let source = config
        .source
        .as_deref()
        .map_or_else(|| "built-in network".to_string(), |p| p.display().to_string());
    println!(
        "{} {source}: {} nodes, teleportation {}, {} sweeps",
        "[OK]".green().bold(),
        network.node_count(),
        config.params.teleportation,
        config.params.max_iteration
    );
    Ok(RankExit::Success)
}

/// Handles the init command.
///
/// # Errors
/// Returns error if the file exists (without `force`) or cannot be written.
pub fn handle_init(path: &Path, force: bool) -> Result<RankExit> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    Config::new().save(path)?;
    println!("{} wrote {}", "[OK]".green().bold(), path.display());
    Ok(RankExit::Success)
}
