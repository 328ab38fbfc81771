//! arrival_sweep — batch driver studying queue behavior vs. arrival rate.
//!
//! Runs 20 quiet simulations of 4000 ticks for each arrival quantity in
//! 1..=10 and persists `{arrival_quantity: [run summary, …]}` as one JSON
//! document under `./output/`.  Unseeded on purpose: the spread across the
//! 20 repetitions is the quantity of interest.

use std::fs;

use anyhow::Result;

use airlift_core::SimConfig;
use airlift_model::FleetPlan;
use airlift_output::JsonBatchWriter;
use airlift_sim::{NoopObserver, SimBuilder};

const STEPS: u64 = 4000;
const RUNS_PER_SETTING: u32 = 20;
const OUTPUT_PATH: &str = "./output/arrival_sweep.json";

fn main() -> Result<()> {
    fs::create_dir_all("./output")?;
    let mut writer = JsonBatchWriter::new(OUTPUT_PATH);

    for arrival_quantity in 1..=10u32 {
        println!("Arrival quantity: {arrival_quantity}");
        for _ in 0..RUNS_PER_SETTING {
            let config = SimConfig {
                arrival_quantity,
                ..SimConfig::default()
            };
            let mut sim = SimBuilder::new(config, FleetPlan::default()).build()?;
            let stats = sim.run(STEPS, &mut NoopObserver)?;
            writer.push(arrival_quantity as u64, stats.summarize());
        }
    }

    writer.finish()?;
    println!(
        "Wrote {} run summaries to {}",
        writer.run_count(),
        writer.path().display()
    );
    Ok(())
}
