use lift_core::LiftError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Invalid run parameters (e.g. zero rounds).
    #[error("simulation configuration error: {0}")]
    Config(String),

    /// Invalid building configuration, rejected by `SimConfig::validate`.
    #[error(transparent)]
    Core(#[from] LiftError),

    /// The arrival generator was built for a different building height.
    #[error("arrival generator tops out at floor {got}, but the building has {expected} floors")]
    FloorMismatch { expected: u32, got: u32 },
}

pub type SimResult<T> = Result<T, SimError>;
