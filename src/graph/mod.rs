// src/graph/mod.rs
//! Static network definition: node order, transition records, validation.

pub mod network;
pub mod transition;
pub mod validate;

pub use network::Network;
pub use transition::TransitionRecord;
pub use validate::{check, Warning};
