//! Learner hyperparameters.

use serde::{Deserialize, Serialize};

/// Q-learning parameters, fixed for the learner's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LearnerConfig {
    /// Step size alpha for the update rule, conceptually in (0, 1].
    pub learning_rate: f64,

    /// Probability epsilon of a uniformly random action when exploring,
    /// conceptually in [0, 1].
    pub exploration_rate: f64,
}

impl Default for LearnerConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.5,
            exploration_rate: 0.1,
        }
    }
}

impl LearnerConfig {
    /// Create a new learner config with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the learning rate (alpha).
    #[must_use]
    pub fn with_learning_rate(mut self, alpha: f64) -> Self {
        self.learning_rate = alpha;
        self
    }

    /// Set the exploration rate (epsilon).
    #[must_use]
    pub fn with_exploration_rate(mut self, epsilon: f64) -> Self {
        self.exploration_rate = epsilon;
        self
    }
}
