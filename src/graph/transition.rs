// src/graph/transition.rs
use serde::{Deserialize, Serialize};

/// Wiring of a single node: who links in, who it links out to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub key: String,
    #[serde(default)]
    pub inputs: Vec<String>,
    #[serde(default)]
    pub outputs: Vec<String>,
}

impl TransitionRecord {
    #[must_use]
    pub fn new(key: &str, inputs: &[&str], outputs: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            inputs: inputs.iter().map(|s| (*s).to_string()).collect(),
            outputs: outputs.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    #[must_use]
    pub fn out_degree(&self) -> usize {
        self.outputs.len()
    }

    /// A node with no outgoing links.
    #[must_use]
    pub fn is_dangling(&self) -> bool {
        self.outputs.is_empty()
    }
}
