//! `lift-output` — simulation output writers for the rust_lift simulator.
//!
//! The CSV backend creates two files in the configured output directory:
//!
//! | File                  | Contents                                 |
//! |-----------------------|------------------------------------------|
//! | `round_summaries.csv` | one row of event counts per round        |
//! | `run_stats.csv`       | one row: the final statistics snapshot   |
//!
//! Backends implement [`OutputWriter`] and are driven by [`StatsObserver`],
//! which implements `lift_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, StatsObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = StatsObserver::new(writer);
//! sim.run(15, &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::StatsObserver;
pub use row::{RoundSummaryRow, RunStatsRow};
pub use writer::OutputWriter;
