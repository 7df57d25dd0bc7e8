// src/rank/mod.rs
//! Rank estimation: the shared table, the per-node estimator and the sweep driver.

pub mod driver;
pub mod estimator;
pub mod params;
pub mod table;

pub use driver::{run, RankSink, RunSummary, Sample};
pub use estimator::{estimate, estimate_from};
pub use params::{DanglingPolicy, RankParams, UpdateMode};
pub use table::{RankTable, INITIAL_RANK};
