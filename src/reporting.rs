// src/reporting.rs
//! Output of per-node samples and end-of-run summaries.

pub mod console;
pub mod json;

pub use console::{format_sample, print_summary, print_warnings, ConsoleSink};
pub use json::{FinalReport, JsonSink};
