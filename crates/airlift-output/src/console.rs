//! Human-readable console reporting.
//!
//! Mirrors the classic interactive output: a state block per tick, a
//! departure block per dispatched airplane, and a statistics block at the
//! end of the run.

use std::io::{self, Write};

use airlift_core::Tick;
use airlift_sim::{DepartureReport, SimObserver, TickState};
use airlift_stats::ModelStats;

use crate::OutputError;

/// A [`SimObserver`] that renders engine state as text.
///
/// Write errors are stored internally because observer methods have no
/// return value; check [`take_error`][Self::take_error] after the run.
pub struct ConsoleObserver<W: Write = io::Stdout> {
    out:        W,
    last_error: Option<OutputError>,
}

impl ConsoleObserver<io::Stdout> {
    /// Report to standard output.
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for ConsoleObserver<io::Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> ConsoleObserver<W> {
    /// Report into any writer (a `Vec<u8>` in tests).
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect captured output).
    pub fn into_writer(self) -> W {
        self.out
    }

    fn store_err(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e.into());
            }
        }
    }

    fn render_state(out: &mut W, state: &TickState) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Timer: {}", state.tick.0)?;
        writeln!(out, "Total containers arrived: {}", state.total_arrived)?;
        writeln!(out, "Number of containers in queue: {}", state.queue_len)?;
        writeln!(out, "Number of present airplanes: {}", state.present_count)?;
        match state.loading {
            Some(info) => {
                writeln!(
                    out,
                    "Loading airplane ID: {} (capacity: {})",
                    info.id, info.capacity
                )?;
                writeln!(out, "Current airplane load: {}", info.load)?;
            }
            None if state.just_departed => {
                writeln!(out, "Airplane has just departed")?;
            }
            None => {
                writeln!(out, "There are no available airplanes")?;
            }
        }
        Ok(())
    }

    fn render_departure(out: &mut W, report: &DepartureReport) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "=== AIRPLANE DEPARTURE INFO ===")?;
        writeln!(out, "Airplane ID: {}", report.id)?;
        writeln!(out, "Number of containers: {}", report.load)?;
        writeln!(out, "Departure moment: {}", report.departed_at.0)?;
        writeln!(out, "Arrival moment: {}", report.returns_at.0)?;
        Ok(())
    }

    fn render_summary(out: &mut W, stats: &ModelStats) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out)?;
        writeln!(out, "=== MODEL STATISTICS ===")?;
        writeln!(out)?;

        let (mean, std) = stats.loading_wait_summary();
        writeln!(out, "Containers loading time: mean={mean:.1}, std={std:.1}")?;
        let (mean, std) = stats.departure_wait_summary();
        writeln!(out, "Containers departure time: mean={mean:.1}, std={std:.1}")?;

        for (capacity, (mean, std)) in stats.airplane_wait_by_capacity() {
            writeln!(out)?;
            writeln!(out, "Statistics for airplane with capacity = {capacity}")?;
            writeln!(out, "Airplanes load time: mean={mean:.1}, std={std:.1}")?;
        }
        Ok(())
    }
}

impl<W: Write> SimObserver for ConsoleObserver<W> {
    fn on_tick_end(&mut self, state: &TickState) {
        let result = Self::render_state(&mut self.out, state);
        self.store_err(result);
    }

    fn on_departure(&mut self, report: &DepartureReport) {
        let result = Self::render_departure(&mut self.out, report);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick, stats: &ModelStats) {
        let result = Self::render_summary(&mut self.out, stats).and_then(|()| self.out.flush());
        self.store_err(result);
    }
}
