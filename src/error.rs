// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankError {
    #[error("no transition record for node '{label}'")]
    UnknownNode { label: String },

    #[error("node '{input}' links into '{node}' but has no outputs (division by zero)")]
    DanglingInput { node: String, input: String },

    #[error("duplicate transition record for key '{0}'")]
    DuplicateKey(String),

    #[error("node '{0}' appears more than once in the node order")]
    DuplicateNode(String),

    #[error("node '{0}' is listed in the node order but has no transition record")]
    MissingRecord(String),

    #[error("transition record '{0}' is not listed in the node order")]
    UnlistedNode(String),

    #[error("record '{record}' references undefined node '{label}' in its {field}")]
    UndefinedReference {
        record: String,
        label: String,
        field: &'static str,
    },

    #[error("network has no nodes")]
    EmptyNetwork,

    #[error("teleportation must be a finite value in [0, 1), got {0}")]
    InvalidTeleportation(f64),

    #[error("tolerance must be a finite positive value, got {0}")]
    InvalidTolerance(f64),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl RankError {
    /// True for errors caught while loading and validating configuration,
    /// as opposed to faults raised during estimation.
    #[must_use]
    pub fn is_config(&self) -> bool {
        !matches!(
            self,
            Self::UnknownNode { .. } | Self::DanglingInput { .. } | Self::Io { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, RankError>;

// Allow `?` on std::io::Error by converting to RankError::Io with unknown path.
impl From<std::io::Error> for RankError {
    fn from(source: std::io::Error) -> Self {
        RankError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
