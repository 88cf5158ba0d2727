//! Capacity-bounded elevator cars.

use lift_core::Floor;

use crate::Person;

/// One elevator car.
///
/// Invariants: `passengers.len() <= capacity` at all times, and `floor`
/// stays inside `[1, max_floor]` (guaranteed by the dispatch boundary
/// contract, not checked here).
#[derive(Clone, Debug)]
pub struct Elevator {
    /// Current floor.
    pub floor: Floor,
    /// Riders in boarding order — index 0 boarded first.
    pub passengers: Vec<Person>,
    /// Maximum rider count, fixed at construction.
    capacity: usize,
}

impl Elevator {
    /// A new empty car parked at `floor`.
    pub fn new(floor: Floor, capacity: usize) -> Self {
        debug_assert!(capacity >= 1, "an elevator must hold at least one rider");
        Self {
            floor,
            passengers: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Occupancy ratio in `[0.0, 1.0]`.
    #[inline]
    pub fn fullness(&self) -> f64 {
        self.passengers.len() as f64 / self.capacity as f64
    }

    /// Whether another rider fits.
    #[inline]
    pub fn has_room(&self) -> bool {
        self.passengers.len() < self.capacity
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }
}
