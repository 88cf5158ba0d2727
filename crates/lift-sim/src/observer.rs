//! Simulation observer hooks for progress reporting and data collection.

use lift_core::Round;
use lift_dispatch::Direction;
use lift_entity::{Elevator, FloorQueues, Person};

use crate::RunStats;

/// Callbacks fired by [`Sim::run`][crate::Sim::run] at each sub-stage of a
/// round.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers are a one-way side channel:
/// every argument is borrowed immutably and nothing an observer does can
/// influence simulation state.
///
/// # Example — round printer
///
/// ```rust,ignore
/// struct RoundPrinter;
///
/// impl SimObserver for RoundPrinter {
///     fn on_round_end(&mut self, round: Round, stats: &RunStats) {
///         println!("{round}: {stats}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// A new round is beginning.
    fn on_round_start(&mut self, _round: Round) {}

    /// The arrival stage produced `batch`, about to join the waiting
    /// registry.
    fn on_arrivals(&mut self, _round: Round, _batch: &FloorQueues) {}

    /// `person` stepped off car `elevator_idx` at their target floor.
    fn on_disembark(&mut self, _person: &Person, _elevator_idx: usize) {}

    /// `person` boarded car `elevator_idx`.
    fn on_board(&mut self, _person: &Person, _elevator_idx: usize) {}

    /// The move stage is applying `directions` (index-aligned with
    /// `elevators`, whose floors are still pre-move).
    fn on_moves(&mut self, _elevators: &[Elevator], _directions: &[Direction]) {}

    /// The round finished; `stats` reflects everything up to and including
    /// it.
    fn on_round_end(&mut self, _round: Round, _stats: &RunStats) {}

    /// The run finished.
    fn on_sim_end(&mut self, _stats: &RunStats) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
