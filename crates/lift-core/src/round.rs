//! Simulation time model.
//!
//! Time is a bare monotonically increasing `Round` counter.  One round is one
//! complete pass through the five simulation stages (arrive, disembark,
//! board, move, age).  There is no wall-clock mapping: the simulation is
//! synchronous and unitless, and a round takes however long it takes.

use std::fmt;

/// An absolute simulation round counter.
///
/// Stored as `u64`; arrival records index rounds with the same width, so a
/// replayed scenario can reference any round a run can actually reach.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Round(pub u64);

impl Round {
    pub const ZERO: Round = Round(0);

    /// Advance to the next round.
    #[inline]
    pub fn advance(&mut self) {
        self.0 += 1;
    }
}

impl std::ops::Add<u64> for Round {
    type Output = Round;
    #[inline]
    fn add(self, rhs: u64) -> Round {
        Round(self.0 + rhs)
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}
