//! Self-play training.
//!
//! A single `QLearner` plays both sides of every game. Each player's most
//! recent `(state, action)` is held back until the outcome of the
//! opponent's reply is known, then credited through `QLearner::update`.
//!
//! ## Usage
//!
//! ```
//! use nim_q::learning::{LearnerConfig, QLearner};
//! use nim_q::training::{SelfPlayConfig, SelfPlayTrainer};
//!
//! let config = SelfPlayConfig::default().with_episodes(200).with_seed(7);
//! let trainer = SelfPlayTrainer::new(config).unwrap();
//!
//! let mut learner = QLearner::new(LearnerConfig::default());
//! let stats = trainer.train(&mut learner).unwrap();
//! assert_eq!(stats.episodes, 200);
//! ```

pub mod self_play;
pub mod stats;

pub use self_play::{EpisodeOutcome, PendingMoves, SelfPlayConfig, SelfPlayTrainer};
pub use stats::TrainingStats;
