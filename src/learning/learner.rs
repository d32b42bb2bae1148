//! Q-learning agent: value lookup, one-step update, epsilon-greedy policy.

use log::trace;

use crate::core::{Action, GameRng, Piles};
use crate::game::available_actions;

use super::config::LearnerConfig;
use super::q_table::QTable;

/// Tabular Q-learner for Nim.
///
/// Holds `Q(state, action)` estimates. Unseen pairs are worth 0. The
/// learner is driven by a caller that plays games and reports transitions
/// through `update`; see `training::SelfPlayTrainer` for the self-play loop.
#[derive(Clone, Debug, Default)]
pub struct QLearner {
    table: QTable,
    config: LearnerConfig,
}

impl QLearner {
    /// Create a learner with an empty table.
    #[must_use]
    pub fn new(config: LearnerConfig) -> Self {
        Self {
            table: QTable::new(),
            config,
        }
    }

    /// Learner parameters.
    #[must_use]
    pub fn config(&self) -> &LearnerConfig {
        &self.config
    }

    /// Read access to the underlying table.
    #[must_use]
    pub fn table(&self) -> &QTable {
        &self.table
    }

    /// Q-value for `(state, action)`; 0 if never updated.
    #[must_use]
    pub fn value(&self, state: &Piles, action: Action) -> f64 {
        self.table.get(state, action).unwrap_or(0.0)
    }

    /// Overwrite the Q-value for `(state, action)`.
    pub fn set_value(&mut self, state: &Piles, action: Action, value: f64) {
        self.table.set(state, action, value);
    }

    /// Highest Q-value over every legal action in `state`.
    ///
    /// Enumerates legal actions on the fly, so actions missing from the
    /// table still count as 0. A state with no legal actions is worth 0.
    #[must_use]
    pub fn best_value(&self, state: &Piles) -> f64 {
        available_actions(state)
            .into_iter()
            .map(|action| self.value(state, action))
            .reduce(f64::max)
            .unwrap_or(0.0)
    }

    /// One-step undiscounted Q-learning update.
    ///
    /// Q(s, a) <- old + alpha * ((reward + max_a' Q(s', a')) - old)
    pub fn update(&mut self, old_state: &Piles, action: Action, new_state: &Piles, reward: f64) {
        let old = self.value(old_state, action);
        let future = self.best_value(new_state);
        let target = reward + future;
        let new = old + self.config.learning_rate * (target - old);

        trace!(
            "Q({}, {}) {} -> {} (reward {}, future {})",
            old_state,
            action,
            old,
            new,
            reward,
            future
        );
        self.table.set(old_state, action, new);
    }

    /// Every legal action whose Q-value equals the maximum exactly.
    ///
    /// Returned in enumeration order; empty iff `state` has no legal actions.
    #[must_use]
    pub fn greedy_actions(&self, state: &Piles) -> Vec<Action> {
        self.ties_at_max(state, available_actions(state))
    }

    fn ties_at_max(&self, state: &Piles, actions: Vec<Action>) -> Vec<Action> {
        let scored: Vec<(Action, f64)> = actions
            .into_iter()
            .map(|action| (action, self.value(state, action)))
            .collect();

        let max = scored
            .iter()
            .map(|&(_, value)| value)
            .fold(f64::NEG_INFINITY, f64::max);

        scored
            .into_iter()
            .filter(|&(_, value)| value == max)
            .map(|(action, _)| action)
            .collect()
    }

    /// Pick an action for `state`, or `None` if there is nothing to take.
    ///
    /// With `explore` set, a uniform draw below the exploration rate picks
    /// any legal action uniformly. Otherwise the choice is uniform among the
    /// actions tied at the best Q-value, so enumeration order never biases
    /// the policy.
    pub fn choose_action(&self, state: &Piles, explore: bool, rng: &mut GameRng) -> Option<Action> {
        let actions = available_actions(state);
        if actions.is_empty() {
            return None;
        }

        if explore && rng.gen_f64() < self.config.exploration_rate {
            return rng.choose(&actions).copied();
        }

        let best = self.ties_at_max(state, actions);
        rng.choose(&best).copied()
    }
}
