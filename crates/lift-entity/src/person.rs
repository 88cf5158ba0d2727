//! People riding (and waiting for) elevators.

use lift_core::Floor;

/// A passenger in the simulation.
///
/// Created by an arrival generator, held in the waiting registry until
/// boarded, then owned by an elevator's passenger list until they step off
/// at their target floor.
///
/// Generated people always have `start != target`; replayed file data may
/// degenerately put someone on the floor they want to reach.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    /// The floor this person appeared on.
    pub start: Floor,
    /// The floor this person wants to reach.
    pub target: Floor,
    /// Rounds elapsed since arrival.  Grows until the person disembarks.
    pub wait_time: u32,
}

impl Person {
    pub fn new(start: Floor, target: Floor) -> Self {
        Self {
            start,
            target,
            wait_time: 0,
        }
    }

    /// Discrete frustration bucket derived from accumulated wait time.
    ///
    /// | wait (rounds) | level |
    /// |---------------|-------|
    /// | 0–2           | 0     |
    /// | 3–4           | 1     |
    /// | 5–6           | 2     |
    /// | 7–8           | 3     |
    /// | ≥9            | 4     |
    pub fn anger_level(&self) -> u8 {
        match self.wait_time {
            0..=2 => 0,
            3..=4 => 1,
            5..=6 => 2,
            7..=8 => 3,
            _ => 4,
        }
    }
}
