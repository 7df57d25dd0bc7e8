// src/config/io.rs
use std::fs;
use std::path::Path;

use crate::config::types::{Config, RankSweepToml};
use crate::error::{RankError, Result};

pub const CONFIG_FILE: &str = "ranksweep.toml";

/// Reads `path` if given, else `ranksweep.toml` in the working directory if
/// present, else falls back to defaults.
///
/// # Errors
/// Returns `Io` if an explicit path cannot be read and `Parse` on bad TOML.
pub fn load(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return read(path);
    }
    let local = Path::new(CONFIG_FILE);
    if local.is_file() {
        return read(local);
    }
    tracing::debug!("no {CONFIG_FILE} found, using built-in network");
    Ok(Config::default())
}

fn read(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|source| RankError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    let mut config = parse_toml(&content)?;
    config.source = Some(path.to_path_buf());
    tracing::debug!("loaded configuration from {}", path.display());
    Ok(config)
}

/// # Errors
/// Returns `Parse` if `content` is not a valid `ranksweep.toml`.
pub fn parse_toml(content: &str) -> Result<Config> {
    let parsed: RankSweepToml = toml::from_str(content)?;
    Ok(Config {
        params: parsed.params,
        graph: parsed.graph,
        source: None,
    })
}

/// # Errors
/// Returns `Serialize` if the configuration cannot be rendered as TOML.
pub fn to_toml(config: &Config) -> Result<String> {
    let doc = RankSweepToml {
        params: config.params,
        graph: config.graph.clone(),
    };
    Ok(toml::to_string_pretty(&doc)?)
}

/// Writes `config` to `path`.
///
/// # Errors
/// Returns `Serialize` or `Io` on failure.
pub fn save_to_file(config: &Config, path: &Path) -> Result<()> {
    let content = to_toml(config)?;
    fs::write(path, content).map_err(|source| RankError::Io {
        source,
        path: path.to_path_buf(),
    })
}
