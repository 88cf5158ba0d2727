//! Top-level simulation configuration.

use crate::{Floor, LiftError, LiftResult};

/// Building and fleet parameters for one simulation run.
///
/// Typically constructed literally by the application and handed to
/// `lift_sim::Sim::new`, which calls [`validate`][Self::validate] before
/// accepting it.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Number of floors in the building.  Must be at least 2.
    pub num_floors: u32,

    /// Number of elevators serving the building.  Must be at least 1.
    pub num_elevators: usize,

    /// Passenger capacity of each elevator.  Must be at least 1.
    pub elevator_capacity: usize,
}

impl SimConfig {
    /// The highest floor in the building.
    #[inline]
    pub fn max_floor(&self) -> Floor {
        Floor(self.num_floors)
    }

    /// Reject invalid configurations up front — values are never clamped.
    pub fn validate(&self) -> LiftResult<()> {
        if self.num_floors < 2 {
            return Err(LiftError::Config(format!(
                "num_floors must be at least 2, got {}",
                self.num_floors
            )));
        }
        if self.num_elevators < 1 {
            return Err(LiftError::Config("num_elevators must be at least 1".into()));
        }
        if self.elevator_capacity < 1 {
            return Err(LiftError::Config("elevator_capacity must be at least 1".into()));
        }
        Ok(())
    }
}
