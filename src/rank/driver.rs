// src/rank/driver.rs
//! Repeated sweeps of the estimator over the whole network.

use serde::Serialize;
use std::io;

use crate::error::Result;
use crate::graph::Network;
use crate::rank::estimator::{estimate, estimate_from};
use crate::rank::params::{RankParams, UpdateMode};
use crate::rank::table::RankTable;

/// One estimator result: which sweep, which node, what rank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    pub iteration: usize,
    pub node: String,
    pub rank: f64,
}

/// Receives every sample as soon as it is computed.
pub trait RankSink {
    /// # Errors
    /// Returns the underlying write error, which aborts the run.
    fn record(&mut self, sample: &Sample) -> io::Result<()>;
}

impl RankSink for Vec<Sample> {
    fn record(&mut self, sample: &Sample) -> io::Result<()> {
        self.push(sample.clone());
        Ok(())
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RunSummary {
    pub sweeps: usize,
    pub samples: usize,
    /// True only when a tolerance was set and reached before `max_iteration`.
    pub converged: bool,
    /// L1 change of the last sweep, when it was measured.
    pub last_delta: Option<f64>,
}

/// Runs `params.max_iteration` sweeps over `network` in its declared order,
/// updating `table` and handing each result to `sink`.
///
/// With a tolerance set the run may end early; without one it always makes
/// exactly `max_iteration * node_count` estimator calls.
///
/// # Errors
/// The first estimator or sink failure aborts the run.
pub fn run<S>(network: &Network, table: &mut RankTable, params: &RankParams, sink: &mut S) -> Result<RunSummary>
where
    S: RankSink + ?Sized,
{
    tracing::info!(
        nodes = network.node_count(),
        max_iteration = params.max_iteration,
        teleportation = params.teleportation,
        "starting rank estimation"
    );

    let keep_start = params.update == UpdateMode::Snapshot || params.tolerance.is_some();
    let mut summary = RunSummary::default();

    for iteration in 1..=params.max_iteration {
        let start = keep_start.then(|| table.clone());

        for node in network.order() {
            let rank = match (&start, params.update) {
                (Some(source), UpdateMode::Snapshot) => estimate_from(node, network, source, table, params)?,
                _ => estimate(node, network, table, params)?,
            };
            sink.record(&Sample {
                iteration,
                node: node.clone(),
                rank,
            })?;
            summary.samples += 1;
        }
        summary.sweeps = iteration;

        if let Some(start) = &start {
            let delta = table.l1_distance(start);
            summary.last_delta = Some(delta);
            tracing::debug!(iteration, delta, "sweep complete");
            if params.tolerance.is_some_and(|tol| delta < tol) {
                summary.converged = true;
                break;
            }
        } else {
            tracing::debug!(iteration, "sweep complete");
        }
    }

    tracing::info!(
        sweeps = summary.sweeps,
        samples = summary.samples,
        converged = summary.converged,
        "rank estimation finished"
    );
    Ok(summary)
}
