// src/graph/network.rs
//! The node order and the keyed transition records.

use std::collections::{HashMap, HashSet};

use crate::error::{RankError, Result};
use crate::graph::transition::TransitionRecord;

/// A fixed network: the sweep order plus one transition record per node.
///
/// Records are indexed by key once at construction, so every lookup during
/// estimation is a hash probe instead of a scan.
#[derive(Debug, Clone)]
pub struct Network {
    order: Vec<String>,
    records: Vec<TransitionRecord>,
    index: HashMap<String, usize>,
}

impl Network {
    /// Builds a network, rejecting duplicate record keys and duplicate
    /// labels in the order.
    ///
    /// References between records are not checked here; see
    /// [`crate::graph::validate::check`].
    ///
    /// # Errors
    /// Returns `DuplicateKey` or `DuplicateNode`.
    pub fn new(order: Vec<String>, records: Vec<TransitionRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(order.len());
        for label in &order {
            if !seen.insert(label.as_str()) {
                return Err(RankError::DuplicateNode(label.clone()));
            }
        }

        let mut index = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            if index.insert(record.key.clone(), pos).is_some() {
                return Err(RankError::DuplicateKey(record.key.clone()));
            }
        }

        Ok(Self {
            order,
            records,
            index,
        })
    }

    /// The three-node cycle used when no graph is configured.
    #[must_use]
    pub fn sample() -> Self {
        let records = vec![
            TransitionRecord::new("A", &["C"], &["B", "C"]),
            TransitionRecord::new("B", &["A"], &["C"]),
            TransitionRecord::new("C", &["B", "C"], &["A"]),
        ];
        let order = ["A", "B", "C"].iter().map(|s| (*s).to_string()).collect();
        Self::from_parts(order, records)
    }

    fn from_parts(order: Vec<String>, records: Vec<TransitionRecord>) -> Self {
        let index = records
            .iter()
            .enumerate()
            .map(|(pos, r)| (r.key.clone(), pos))
            .collect();
        Self {
            order,
            records,
            index,
        }
    }

    /// Finds the record whose key equals `label`.
    ///
    /// # Errors
    /// Returns `UnknownNode` if no record has that key.
    pub fn lookup(&self, label: &str) -> Result<&TransitionRecord> {
        self.index
            .get(label)
            .and_then(|&pos| self.records.get(pos))
            .ok_or_else(|| RankError::UnknownNode {
                label: label.to_string(),
            })
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Node labels in sweep order.
    #[must_use]
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Records in declaration order.
    #[must_use]
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    /// Number of nodes in the sweep order; the `N` of the teleport term.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// # Errors
    /// Returns `UnknownNode` if `label` has no record.
    pub fn out_degree(&self, label: &str) -> Result<usize> {
        self.lookup(label).map(TransitionRecord::out_degree)
    }

    /// Records with no outputs, in declaration order.
    pub fn dangling_nodes(&self) -> impl Iterator<Item = &TransitionRecord> {
        self.records.iter().filter(|r| r.is_dangling())
    }
}
