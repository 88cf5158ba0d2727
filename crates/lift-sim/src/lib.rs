//! `lift-sim` — round loop orchestrator for the rust_lift simulator.
//!
//! # Five-stage round loop
//!
//! ```text
//! for round in 0..num_rounds:
//!   ① Arrive    — merge the arrival generator's batch into the waiting
//!                 registry.
//!   ② Disembark — passengers at their target floor leave and are counted.
//!   ③ Board     — waiting people enter the first car with room on their
//!                 floor, floor by floor, arrival order within a floor.
//!   ④ Move      — apply the dispatch policy's directions, one per car.
//!   ⑤ Age       — everyone still waiting or riding waits one round longer.
//! ```
//!
//! Strictly single-threaded and synchronous: each stage runs to completion
//! before the next begins, and the strategies see a stable snapshot of the
//! fleet and registry for the round.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_arrivals::RandomArrivals;
//! use lift_core::{SimConfig, SimRng};
//! use lift_dispatch::RandomMoves;
//! use lift_sim::{NoopObserver, Sim};
//!
//! let config = SimConfig { num_floors: 6, num_elevators: 2, elevator_capacity: 3 };
//! let arrivals = RandomArrivals::new(config.max_floor(), 2, SimRng::new(42))?;
//! let mut sim = Sim::new(config, arrivals, RandomMoves::new(SimRng::new(7)))?;
//! let stats = sim.run(15, &mut NoopObserver)?;
//! ```

pub mod error;
pub mod observer;
pub mod sim;
pub mod stats;


pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use stats::{NO_DATA, RunStats};
