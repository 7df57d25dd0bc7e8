// src/bin/ranksweep.rs
use clap::{CommandFactory, Parser};
use colored::Colorize;
use ranksweep_core::cli::{self, Cli};
use ranksweep_core::exit::RankExit;
use ranksweep_core::logging;

fn main() -> RankExit {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        return RankExit::Success;
    };

    match cli::dispatch::execute(command) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            RankExit::for_error(&e)
        }
    }
}
