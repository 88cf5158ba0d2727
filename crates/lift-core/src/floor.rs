//! 1-based building floors.

use std::fmt;

/// A building floor.
///
/// Floors are numbered from 1 (ground) up to the building's `max_floor`
/// inclusive; `Floor(0)` is never valid.  The inner integer is `pub` for
/// direct construction in configuration and test code, but per-floor arrays
/// should be indexed through [`index`][Self::index].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Floor(pub u32);

impl Floor {
    /// The lowest floor of every building.
    pub const GROUND: Floor = Floor(1);

    /// Zero-based slot for indexing per-floor arrays (floor 1 → slot 0).
    #[inline]
    pub fn index(self) -> usize {
        debug_assert!(self.0 >= 1, "Floor(0) is not a valid floor");
        (self.0 - 1) as usize
    }

    /// Absolute distance to `other`, in floors.
    #[inline]
    pub fn distance(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// The floor directly above.
    #[inline]
    pub fn above(self) -> Floor {
        Floor(self.0 + 1)
    }

    /// The floor directly below.
    ///
    /// # Panics
    /// Debug-asserts that `self` is not the ground floor.
    #[inline]
    pub fn below(self) -> Floor {
        debug_assert!(self > Floor::GROUND, "no floor below ground");
        Floor(self.0 - 1)
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}
