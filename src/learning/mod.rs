//! Tabular Q-learning.
//!
//! - **QTable**: sparse `(state, action) -> value` store, unseen pairs read as 0
//! - **QLearner**: one-step undiscounted update and epsilon-greedy policy
//!
//! ## Usage
//!
//! ```
//! use nim_q::core::{Action, GameRng, Piles};
//! use nim_q::learning::{LearnerConfig, QLearner};
//!
//! let mut learner = QLearner::new(LearnerConfig::default());
//! let before = Piles::from([0, 0, 1, 0]);
//! let after = Piles::from([0, 0, 0, 0]);
//!
//! learner.update(&before, Action::new(2, 1), &after, -1.0);
//! assert_eq!(learner.value(&before, Action::new(2, 1)), -0.5);
//!
//! let mut rng = GameRng::new(42);
//! let action = learner.choose_action(&Piles::from([1, 3, 5, 7]), false, &mut rng);
//! assert!(action.is_some());
//! ```

pub mod config;
pub mod learner;
pub mod q_table;

pub use config::LearnerConfig;
pub use learner::QLearner;
pub use q_table::QTable;
