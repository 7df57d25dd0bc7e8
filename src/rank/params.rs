// src/rank/params.rs
use serde::{Deserialize, Serialize};

use crate::error::{RankError, Result};

/// How a sweep reads the ranks of nodes already updated in that sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum UpdateMode {
    /// Read and write one table, so later nodes see earlier updates.
    #[default]
    InPlace,
    /// Read from the ranks as they stood at sweep start (Jacobi style).
    Snapshot,
}

/// What to do with an input node that has no outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DanglingPolicy {
    /// Abort the run with `DanglingInput`.
    #[default]
    Fail,
    /// Spread each dangling node's rank evenly over every node.
    Uniform,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankParams {
    #[serde(default = "default_teleportation")]
    pub teleportation: f64,
    #[serde(default = "default_max_iteration")]
    pub max_iteration: usize,
    /// Stop once a sweep changes the table by less than this (L1). Unset
    /// means always run `max_iteration` sweeps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,
    #[serde(default)]
    pub update: UpdateMode,
    #[serde(default)]
    pub dangling: DanglingPolicy,
}

impl Default for RankParams {
    fn default() -> Self {
        Self {
            teleportation: default_teleportation(),
            max_iteration: default_max_iteration(),
            tolerance: None,
            update: UpdateMode::default(),
            dangling: DanglingPolicy::default(),
        }
    }
}

const fn default_teleportation() -> f64 { 0.15 }
const fn default_max_iteration() -> usize { 100 }

impl RankParams {
    /// # Errors
    /// Returns `InvalidTeleportation` unless `0 <= teleportation < 1`, and
    /// `InvalidTolerance` for a non-positive or non-finite tolerance.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.teleportation) {
            return Err(RankError::InvalidTeleportation(self.teleportation));
        }
        if let Some(tol) = self.tolerance {
            if !tol.is_finite() || tol <= 0.0 {
                return Err(RankError::InvalidTolerance(tol));
            }
        }
        Ok(())
    }
}
