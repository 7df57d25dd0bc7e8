// src/cli/args.rs
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::CONFIG_FILE;
use crate::rank::{DanglingPolicy, RankParams, UpdateMode};

#[derive(Parser)]
#[command(name = "ranksweep", version, about = "Fixed-sweep PageRank over a configured graph")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the rank sweeps and report every estimate
    Run(RunArgs),
    /// Validate a configuration without ranking
    Check {
        #[arg(long, short, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Write a starter configuration with the sample network
    Init {
        #[arg(value_name = "FILE", default_value = CONFIG_FILE)]
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

/// Arguments for the run command. Set values override the config file.
#[allow(clippy::struct_excessive_bools)]
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    #[arg(long, short, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Teleport probability in [0, 1)
    #[arg(long, short)]
    pub teleportation: Option<f64>,
    /// Number of full sweeps
    #[arg(long, short = 'n')]
    pub max_iteration: Option<usize>,
    /// Stop early once a sweep changes ranks by less than this (L1)
    #[arg(long)]
    pub tolerance: Option<f64>,
    /// Read ranks from the start of each sweep instead of updating in place
    #[arg(long)]
    pub snapshot: bool,
    #[arg(long, value_enum)]
    pub dangling: Option<DanglingPolicy>,
    /// Emit newline-delimited JSON instead of progress lines
    #[arg(long)]
    pub json: bool,
    /// Only print the final summary
    #[arg(long, short)]
    pub quiet: bool,
}

impl RunArgs {
    /// Overlays the flags that were given onto `params`.
    pub fn apply(&self, params: &mut RankParams) {
        if let Some(t) = self.teleportation {
            params.teleportation = t;
        }
        if let Some(n) = self.max_iteration {
            params.max_iteration = n;
        }
        if self.tolerance.is_some() {
            params.tolerance = self.tolerance;
        }
        if self.snapshot {
            params.update = UpdateMode::Snapshot;
        }
        if let Some(policy) = self.dangling {
            params.dangling = policy;
        }
    }
}
