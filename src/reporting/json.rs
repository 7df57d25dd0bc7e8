// src/reporting/json.rs
use serde::Serialize;
use std::io::{self, Write};

use crate::rank::{RankSink, RankTable, RunSummary, Sample};

/// Writes each sample as a single JSON object per line.
pub struct JsonSink<W: Write> {
    out: W,
}

impl JsonSink<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RankSink for JsonSink<W> {
    fn record(&mut self, sample: &Sample) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, sample)?;
        self.out.write_all(b"\n")
    }
}

#[derive(Debug, Serialize)]
pub struct RankedNode {
    pub node: String,
    pub rank: f64,
}

/// Closing record of a `--json` run.
#[derive(Debug, Serialize)]
pub struct FinalReport {
    pub summary: RunSummary,
    pub ranks: Vec<RankedNode>,
}

impl FinalReport {
    #[must_use]
    pub fn new(summary: RunSummary, table: &RankTable) -> Self {
        let ranks = table
            .ranked()
            .into_iter()
            .map(|(node, rank)| RankedNode { node, rank })
            .collect();
        Self { summary, ranks }
    }

    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_are_newline_delimited_json() {
        let mut sink = JsonSink::new(Vec::new());
        let s = Sample {
            iteration: 1,
            node: "A".into(),
            rank: 0.9,
        };
        sink.record(&s).unwrap();
        sink.record(&s).unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        let v: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(v["node"], "A");
        assert_eq!(v["iteration"], 1);
        assert_eq!(v["rank"], 0.9);
    }
}
