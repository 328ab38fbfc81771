//! Batch-run result persistence.
//!
//! Sweep drivers run many simulations while varying one parameter and
//! persist `{parameter: [RunSummary, …]}` as a single flat, human-readable
//! JSON document.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use airlift_stats::RunSummary;

use crate::OutputResult;

/// Accumulates per-parameter run summaries and writes them out once.
///
/// A `BTreeMap` keys the document, so the persisted file is ordered by
/// parameter value regardless of insertion order.
pub struct JsonBatchWriter {
    path:     PathBuf,
    results:  BTreeMap<u64, Vec<RunSummary>>,
    finished: bool,
}

impl JsonBatchWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path:     path.into(),
            results:  BTreeMap::new(),
            finished: false,
        }
    }

    /// Record one run's summary under `parameter` (the swept value).
    pub fn push(&mut self, parameter: u64, summary: RunSummary) {
        self.results.entry(parameter).or_default().push(summary);
    }

    /// Runs recorded so far, across all parameters.
    pub fn run_count(&self) -> usize {
        self.results.values().map(Vec::len).sum()
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the whole document.  Idempotent — the first call persists,
    /// later calls are no-ops.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        let file = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(file, &self.results)?;
        Ok(())
    }
}
