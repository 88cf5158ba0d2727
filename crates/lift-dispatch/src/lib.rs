//! `lift-dispatch` — per-round elevator movement decisions.
//!
//! # Crate layout
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`direction`]   | `Direction` enum and the boundary-bounds helper       |
//! | [`algorithm`]   | `MovingAlgorithm` trait                               |
//! | [`random`]      | `RandomMoves` — uniform random directions             |
//! | [`pushy`]       | `PushyPassenger` — first rider (or lowest floor) wins |
//! | [`short_sighted`] | `ShortSighted` — nearest job wins                   |
//!
//! Dispatch policies are total functions over valid input: they never fail,
//! and every direction they return respects the floor bounds.  Out-of-range
//! elevator floors are a caller invariant violation, not something handled
//! here.

pub mod algorithm;
pub mod direction;
pub mod pushy;
pub mod random;
pub mod short_sighted;


pub use algorithm::MovingAlgorithm;
pub use direction::Direction;
pub use pushy::PushyPassenger;
pub use random::RandomMoves;
pub use short_sighted::ShortSighted;
