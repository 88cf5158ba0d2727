//! Per-round movement decisions.

use std::fmt;

use lift_core::Floor;

/// The movement an elevator makes at the end of a round.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Stay,
    Down,
}

impl Direction {
    /// The direction that brings a car at `from` closer to `to`.
    ///
    /// Equal floors give `Stay`.
    #[inline]
    pub fn toward(from: Floor, to: Floor) -> Direction {
        use std::cmp::Ordering;
        match to.cmp(&from) {
            Ordering::Greater => Direction::Up,
            Ordering::Less => Direction::Down,
            Ordering::Equal => Direction::Stay,
        }
    }

    /// Whether this direction keeps a car at `floor` inside `[1, max_floor]`.
    #[inline]
    pub fn stays_in_bounds(self, floor: Floor, max_floor: Floor) -> bool {
        match self {
            Direction::Up => floor < max_floor,
            Direction::Down => floor > Floor::GROUND,
            Direction::Stay => true,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up => "up",
            Direction::Stay => "stay",
            Direction::Down => "down",
        };
        f.write_str(s)
    }
}
