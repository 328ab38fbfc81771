//! Raw wait-time series as CSV files.
//!
//! Creates three files in the configured output directory:
//! - `container_loading_waits.csv`
//! - `container_departure_waits.csv`
//! - `airplane_waits.csv`
//!
//! External plotting tools bin these into the three wait-time histograms;
//! no rendering happens here.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use airlift_stats::ModelStats;

use crate::OutputResult;

/// Writes the raw sample series of one run to CSV.
pub struct WaitSeriesWriter {
    loading:   Writer<File>,
    departure: Writer<File>,
    airplanes: Writer<File>,
    finished:  bool,
}

impl WaitSeriesWriter {
    /// Open (or create) the three CSV files in `dir` and write header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut loading = Writer::from_path(dir.join("container_loading_waits.csv"))?;
        loading.write_record(["wait_ticks"])?;

        let mut departure = Writer::from_path(dir.join("container_departure_waits.csv"))?;
        departure.write_record(["wait_ticks"])?;

        let mut airplanes = Writer::from_path(dir.join("airplane_waits.csv"))?;
        airplanes.write_record(["capacity", "wait_ticks"])?;

        Ok(Self {
            loading,
            departure,
            airplanes,
            finished: false,
        })
    }

    /// Append every sample of `stats` to the series files.
    pub fn write_stats(&mut self, stats: &ModelStats) -> OutputResult<()> {
        for wait in stats.loading_waits() {
            self.loading.write_record(&[wait.to_string()])?;
        }
        for wait in stats.departure_waits() {
            self.departure.write_record(&[wait.to_string()])?;
        }
        for sample in stats.airplane_waits() {
            self.airplanes
                .write_record(&[sample.capacity.to_string(), sample.wait.to_string()])?;
        }
        Ok(())
    }

    /// Flush all underlying file handles.  Idempotent.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.loading.flush()?;
        self.departure.flush()?;
        self.airplanes.flush()?;
        Ok(())
    }
}
