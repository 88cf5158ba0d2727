//! sample — smallest runnable configuration of the rust_lift simulator.
//!
//! Six floors, six elevators of capacity 3, two random arrivals per round,
//! random dispatch, 15 rounds.  Swap the strategies (`PushyPassenger`,
//! `ShortSighted`, `FileArrivals`) or the configuration to experiment.

use std::path::Path;

use anyhow::Result;

use lift_arrivals::RandomArrivals;
use lift_core::{SimConfig, SimRng};
use lift_dispatch::RandomMoves;
use lift_output::{CsvWriter, StatsObserver};
use lift_sim::Sim;

const SEED:       u64 = 42;
const NUM_ROUNDS: u64 = 15;
const OUTPUT_DIR: &str = "output/sample";

fn main() -> Result<()> {
    println!("=== sample — rust_lift elevator simulation ===");
    println!("Seed: {SEED}  |  Rounds: {NUM_ROUNDS}");
    println!();

    // 1. Configuration.
    let config = SimConfig {
        num_floors:        6,
        num_elevators:     6,
        elevator_capacity: 3,
    };

    // 2. Strategies, each on an independent stream derived from one seed.
    let mut root = SimRng::new(SEED);
    let arrivals = RandomArrivals::new(config.max_floor(), 2, root.child(0))?;
    let dispatch = RandomMoves::new(root.child(1));

    // 3. Simulation and CSV output.
    let mut sim = Sim::new(config, arrivals, dispatch)?;

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut observer = StatsObserver::new(writer);

    // 4. Run.
    let stats = sim.run(NUM_ROUNDS, &mut observer)?;
    if let Some(e) = observer.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!("Wrote {OUTPUT_DIR}/round_summaries.csv and run_stats.csv");
    println!();
    println!("{:<22} {:>10}", "rounds run", stats.rounds);
    println!("{:<22} {:>10}", "people arrived", stats.total_arrivals);
    println!("{:<22} {:>10}", "people completed", stats.people_completed);
    println!("{:<22} {:>10}", "max wait (rounds)", stats.max_wait);
    println!("{:<22} {:>10}", "min wait (rounds)", stats.min_wait);
    println!("{:<22} {:>10.2}", "avg wait (rounds)", stats.avg_wait);

    Ok(())
}
