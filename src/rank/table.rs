// src/rank/table.rs
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::error::{RankError, Result};
use crate::graph::Network;

/// Every node's rank before the first sweep.
pub const INITIAL_RANK: f64 = 1.0;

/// Current rank of every node. Created once per run and updated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct RankTable {
    ranks: HashMap<String, f64>,
}

impl RankTable {
    /// Starts every node in the network's order at [`INITIAL_RANK`].
    #[must_use]
    pub fn init(network: &Network) -> Self {
        let ranks = network
            .order()
            .iter()
            .map(|label| (label.clone(), INITIAL_RANK))
            .collect();
        Self { ranks }
    }

    /// # Errors
    /// Returns `UnknownNode` if the table has no entry for `label`.
    pub fn get(&self, label: &str) -> Result<f64> {
        self.ranks
            .get(label)
            .copied()
            .ok_or_else(|| RankError::UnknownNode {
                label: label.to_string(),
            })
    }

    /// Overwrites (or inserts) the rank for `label`.
    pub fn set(&mut self, label: &str, rank: f64) {
        match self.ranks.get_mut(label) {
            Some(slot) => *slot = rank,
            None => {
                self.ranks.insert(label.to_string(), rank);
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.ranks.values().sum()
    }

    /// Sum of absolute per-node differences against `other`.
    /// Nodes missing from `other` count as zero there.
    #[must_use]
    pub fn l1_distance(&self, other: &Self) -> f64 {
        self.ranks
            .iter()
            .map(|(label, rank)| (rank - other.ranks.get(label).copied().unwrap_or(0.0)).abs())
            .sum()
    }

    /// Ranks sorted highest first, ties broken by label.
    #[must_use]
    pub fn ranked(&self) -> Vec<(String, f64)> {
        let mut ranked: Vec<_> = self.ranks.iter().map(|(l, r)| (l.clone(), *r)).collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        ranked
    }
}
