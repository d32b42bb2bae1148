//! Core types: players, piles, actions, RNG, errors, configuration.
//!
//! Everything here is shared by the game engine and the learner.

pub mod action;
pub mod config;
pub mod error;
pub mod piles;
pub mod player;
pub mod rng;

pub use action::Action;
pub use config::{GameConfig, DEFAULT_PILES};
pub use error::{ActionFault, NimError, Result};
pub use piles::Piles;
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
