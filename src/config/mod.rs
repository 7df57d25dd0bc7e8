// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{Config, GraphConfig, RankSweepToml};

use std::path::Path;

use crate::error::Result;
use crate::graph::{self, Network, Warning};

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `path`, or `ranksweep.toml` from the working directory, or defaults.
    ///
    /// # Errors
    /// Returns error if a configuration file exists but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        io::load(path)
    }

    /// # Errors
    /// Returns `Parse` on malformed TOML.
    pub fn from_toml(content: &str) -> Result<Self> {
        io::parse_toml(content)
    }

    /// # Errors
    /// Returns `Serialize` if rendering fails.
    pub fn to_toml(&self) -> Result<String> {
        io::to_toml(self)
    }

    /// Saves the configuration to `path`.
    ///
    /// # Errors
    /// Returns error if file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        io::save_to_file(self, path)
    }

    /// Builds the network and validates it together with the parameters.
    ///
    /// # Errors
    /// Returns the first configuration error found.
    pub fn validate(&self) -> Result<(Network, Vec<Warning>)> {
        self.params.validate()?;
        let network = Network::new(self.graph.order.clone(), self.graph.nodes.clone())?;
        let warnings = graph::check(&network)?;
        Ok((network, warnings))
    }

    /// Like [`Config::validate`], discarding the warnings (they are logged).
    ///
    /// # Errors
    /// Returns the first configuration error found.
    pub fn network(&self) -> Result<Network> {
        self.validate().map(|(network, _)| network)
    }
}
