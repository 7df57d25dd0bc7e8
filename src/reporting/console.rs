// src/reporting/console.rs
use colored::Colorize;
use std::io::{self, Write};

use crate::graph::Warning;
use crate::rank::{RankSink, RankTable, RunSummary, Sample};

/// Plain progress line for one sample: `#1 => [Node: A / Page-Rank: 0.9]`.
#[must_use]
pub fn format_sample(sample: &Sample) -> String {
    format!(
        "#{} => [Node: {} / Page-Rank: {}]",
        sample.iteration, sample.node, sample.rank
    )
}

/// Writes one human-readable line per sample.
pub struct ConsoleSink<W: Write> {
    out: W,
    quiet: bool,
}

impl ConsoleSink<io::Stdout> {
    #[must_use]
    pub fn stdout(quiet: bool) -> Self {
        Self::new(io::stdout(), quiet)
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W, quiet: bool) -> Self {
        Self { out, quiet }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RankSink for ConsoleSink<W> {
    fn record(&mut self, sample: &Sample) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.out, "{}", format_sample(sample))
    }
}

/// Prints the final ranks, highest first, and how the run ended.
pub fn print_summary(summary: &RunSummary, table: &RankTable) {
    println!();
    println!("{}", "Final ranks".bold());
    for (pos, (node, rank)) in table.ranked().iter().enumerate() {
        println!("  {:>3}. {:<12} {rank:.6}", pos + 1, node.cyan());
    }

    let ending = if summary.converged {
        "converged".green().to_string()
    } else {
        "fixed budget".yellow().to_string()
    };
    let delta = summary
        .last_delta
        .map(|d| format!(", last delta {d:.3e}"))
        .unwrap_or_default();
    println!(
        "{} sweeps, {} estimates ({ending}{delta}), rank sum {:.6}",
        summary.sweeps,
        summary.samples,
        table.sum()
    );
}

/// Prints validation warnings; nothing when there are none.
pub fn print_warnings(warnings: &[Warning]) {
    for w in warnings {
        println!("{} {w}", "warning:".yellow().bold());
    }
}
