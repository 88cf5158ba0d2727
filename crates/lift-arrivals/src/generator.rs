//! The `ArrivalGenerator` trait — the arrival-side extension point.

use lift_core::{Floor, Round};
use lift_entity::FloorQueues;

/// Pluggable source of new passengers.
///
/// The simulation calls [`generate`][Self::generate] exactly once per round
/// and merges the result into its waiting registry.  The returned batch
/// always covers every floor from 1 to [`max_floor`][Self::max_floor]
/// (empty queues allowed), which the `FloorQueues` type guarantees by
/// construction.
///
/// Implementations hold configuration (and, for random variants, RNG state)
/// but no per-person or per-elevator simulation state across rounds.
pub trait ArrivalGenerator {
    /// The highest floor this generator produces arrivals for.
    ///
    /// Must match the building the generator is plugged into; the simulation
    /// rejects a mismatch at construction.
    fn max_floor(&self) -> Floor;

    /// New arrivals for `round`, keyed by starting floor.
    fn generate(&mut self, round: Round) -> FloorQueues;
}
