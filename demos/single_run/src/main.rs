//! single_run — one seeded simulation with full console output.
//!
//! Runs the reference fleet (3×80 + 2×140) for 1000 ticks, prints the
//! per-tick state lines and the closing statistics block, and dumps the raw
//! wait-time series to `./output/` for external histogram rendering.

use std::fs;
use std::path::Path;

use anyhow::Result;

use airlift_core::SimConfig;
use airlift_model::FleetPlan;
use airlift_output::{ConsoleObserver, WaitSeriesWriter};
use airlift_sim::SimBuilder;

const STEPS: u64 = 1000;
const SEED: u64 = 42;
const OUTPUT_DIR: &str = "./output";

fn main() -> Result<()> {
    let config = SimConfig {
        seed: Some(SEED),
        ..SimConfig::default()
    };
    let mut sim = SimBuilder::new(config, FleetPlan::default()).build()?;

    let mut console = ConsoleObserver::stdout();
    let stats = sim.run(STEPS, &mut console)?;
    if let Some(e) = console.take_error() {
        eprintln!("console output error: {e}");
    }

    let dir = Path::new(OUTPUT_DIR);
    fs::create_dir_all(dir)?;
    let mut series = WaitSeriesWriter::new(dir)?;
    series.write_stats(&stats)?;
    series.finish()?;

    println!("\nWait-time series written to {}", dir.display());
    Ok(())
}
