//! The `MovingAlgorithm` trait — the dispatch extension point.

use lift_core::Floor;
use lift_entity::{Elevator, FloorQueues};

use crate::Direction;

/// Pluggable per-round dispatch policy.
///
/// Called exactly once per round with a stable snapshot of the fleet and the
/// waiting registry; returns one direction per elevator, index-aligned with
/// the input slice.  Policies see queue contents and passenger lists but
/// never mutate them, and retain nothing between calls beyond their own
/// configuration (for random variants, RNG state).
///
/// # Boundary contract
///
/// Implementations must never return `Down` for a car on floor 1 nor `Up`
/// for a car on `max_floor`.  The engine applies directions unchecked, so
/// violating this is a bug in the policy, not a runtime error.
pub trait MovingAlgorithm {
    fn move_elevators(
        &mut self,
        elevators: &[Elevator],
        waiting:   &FloorQueues,
        max_floor: Floor,
    ) -> Vec<Direction>;
}
