//! `lift-core` — foundational types for the `rust_lift` elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It intentionally
//! has no `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`).
//!
//! # What lives here
//!
//! | Module     | Contents                                 |
//! |------------|------------------------------------------|
//! | [`round`]  | `Round` — the discrete time-step counter |
//! | [`floor`]  | `Floor` — 1-based building floors        |
//! | [`rng`]    | `SimRng` — deterministic seeded RNG      |
//! | [`config`] | `SimConfig` — building/fleet parameters  |
//! | [`error`]  | `LiftError`, `LiftResult`                |

pub mod config;
pub mod error;
pub mod floor;
pub mod rng;
pub mod round;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{LiftError, LiftResult};
pub use floor::Floor;
pub use rng::SimRng;
pub use round::Round;
