//! Nim game engine.
//!
//! Pure state-transition logic:
//! - Legal actions for a pile configuration
//! - How a move changes the piles and the player to move
//! - When the game is over and who is recorded as winner
//!
//! The learner depends only on `available_actions`; it never touches a
//! live `Game`.

pub mod nim;

pub use nim::{available_actions, Game, GameResult};
