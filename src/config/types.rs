// src/config/types.rs
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::graph::{Network, TransitionRecord};
use crate::rank::RankParams;

/// The `[graph]` table: sweep order plus one `[[graph.node]]` per record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    pub order: Vec<String>,
    #[serde(default, rename = "node")]
    pub nodes: Vec<TransitionRecord>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        let sample = Network::sample();
        Self {
            order: sample.order().to_vec(),
            nodes: sample.records().to_vec(),
        }
    }
}

/// On-disk layout of `ranksweep.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankSweepToml {
    #[serde(default)]
    pub params: RankParams,
    #[serde(default)]
    pub graph: GraphConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub params: RankParams,
    pub graph: GraphConfig,
    /// File the configuration was read from, if any.
    pub source: Option<PathBuf>,
}
