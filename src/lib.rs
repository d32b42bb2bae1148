//! # nim-q
//!
//! Nim with a self-play tabular Q-learning agent.
//!
//! ## Design Principles
//!
//! 1. **Pure engine**: `game` is deterministic state-transition logic with
//!    no knowledge of learning.
//!
//! 2. **Exact table**: Q-values live in a sparse hash table keyed by
//!    `(piles, action)`. Unseen pairs are worth 0.
//!
//! 3. **Injected randomness**: every random draw goes through a caller-owned
//!    `GameRng`, so any run can be reproduced from its seed.
//!
//! ## Rules as Implemented
//!
//! After a move the turn passes to the other player. If the move emptied
//! every pile, the player now to move is recorded as winner, so taking the
//! last object loses. Self-play rewards match: -1 for the emptying move,
//! +1 for the opponent's move before it.
//!
//! ## Modules
//!
//! - `core`: Players, piles, actions, RNG, errors, configuration
//! - `game`: Nim state machine and action enumeration
//! - `learning`: Q-table and epsilon-greedy learner
//! - `training`: Self-play loop with per-player credit assignment
//! - `play`: Interactive human vs. learner match

pub mod core;
pub mod game;
pub mod learning;
pub mod play;
pub mod training;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionFault, GameConfig, GameRng, NimError, Piles, PlayerId, PlayerMap,
    Result, DEFAULT_PILES,
};

pub use crate::game::{available_actions, Game, GameResult};

pub use crate::learning::{LearnerConfig, QLearner, QTable};

pub use crate::training::{EpisodeOutcome, PendingMoves, SelfPlayConfig, SelfPlayTrainer, TrainingStats};

pub use crate::play::{HumanMatch, Side};
