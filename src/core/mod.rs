//! Core engine types: players, scores, RNG, errors.
//!
//! These are the game-agnostic building blocks shared by every ruler and by
//! the round engine.

pub mod error;
pub mod player;
pub mod rng;

pub use error::EngineError;
pub use player::{PlayerId, PlayerMap, Scoreboard};
pub use rng::GameRng;
