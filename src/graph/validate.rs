// src/graph/validate.rs
//! Load-time validation of a network.
//!
//! Structural defects (missing records, undefined references) are hard
//! errors so they never surface later as a lookup fault mid-sweep. Wiring
//! oddities that the ranking formula tolerates are reported as warnings.

use std::collections::HashSet;
use std::fmt;

use crate::error::{RankError, Result};
use crate::graph::network::Network;

/// A non-fatal finding about the network's wiring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// `from` lists `to` as an output, but `to` does not list `from` as an input.
    MissingInput { from: String, to: String },
    /// `to` lists `from` as an input, but `from` does not list `to` as an output.
    MissingOutput { from: String, to: String },
    /// Node with no outputs.
    Dangling(String),
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput { from, to } => {
                write!(f, "{from} -> {to} is an output of {from} but not an input of {to}")
            }
            Self::MissingOutput { from, to } => {
                write!(f, "{from} -> {to} is an input of {to} but not an output of {from}")
            }
            Self::Dangling(node) => write!(f, "{node} has no outputs"),
        }
    }
}

/// Validates `network`, returning wiring warnings on success.
///
/// # Errors
/// Returns `EmptyNetwork`, `MissingRecord`, `UnlistedNode` or
/// `UndefinedReference` for the first structural defect found.
pub fn check(network: &Network) -> Result<Vec<Warning>> {
    if network.order().is_empty() {
        return Err(RankError::EmptyNetwork);
    }

    for label in network.order() {
        if !network.contains(label) {
            return Err(RankError::MissingRecord(label.clone()));
        }
    }

    let listed: HashSet<&str> = network.order().iter().map(String::as_str).collect();
    for record in network.records() {
        if !listed.contains(record.key.as_str()) {
            return Err(RankError::UnlistedNode(record.key.clone()));
        }
        check_refs(network, &record.key, &record.inputs, "inputs")?;
        check_refs(network, &record.key, &record.outputs, "outputs")?;
    }

    let warnings = collect_warnings(network);
    for w in &warnings {
        tracing::warn!("{w}");
    }
    Ok(warnings)
}

fn check_refs(network: &Network, record: &str, labels: &[String], field: &'static str) -> Result<()> {
    match labels.iter().find(|l| !network.contains(l)) {
        Some(label) => Err(RankError::UndefinedReference {
            record: record.to_string(),
            label: label.clone(),
            field,
        }),
        None => Ok(()),
    }
}

fn collect_warnings(network: &Network) -> Vec<Warning> {
    let mut edges_out = HashSet::new();
    let mut edges_in = HashSet::new();
    for record in network.records() {
        for to in &record.outputs {
            edges_out.insert((record.key.as_str(), to.as_str()));
        }
        for from in &record.inputs {
            edges_in.insert((from.as_str(), record.key.as_str()));
        }
    }

    let mut warnings = Vec::new();
    for record in network.records() {
        for to in &record.outputs {
            if !edges_in.contains(&(record.key.as_str(), to.as_str())) {
                warnings.push(Warning::MissingInput {
                    from: record.key.clone(),
                    to: to.clone(),
                });
            }
        }
        for from in &record.inputs {
            if !edges_out.contains(&(from.as_str(), record.key.as_str())) {
                warnings.push(Warning::MissingOutput {
                    from: from.clone(),
                    to: record.key.clone(),
                });
            }
        }
    }
    warnings.extend(network.dangling_nodes().map(|r| Warning::Dangling(r.key.clone())));
    warnings
}
