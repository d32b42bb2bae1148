//! Self-play loop with per-player credit assignment.
//!
//! One learner plays both sides. Rewards enter the table only at the end of
//! a game: the move that emptied the piles gets -1 and the opponent's last
//! move gets +1. Every earlier transition is updated with reward 0 once the
//! opponent has replied.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{Action, GameConfig, GameRng, NimError, Piles, PlayerId, PlayerMap, Result};
use crate::game::Game;
use crate::learning::QLearner;

use super::stats::TrainingStats;

/// Reward for the move that takes the last object.
const LOSS_REWARD: f64 = -1.0;

/// Reward for the opponent's move that preceded it.
const WIN_REWARD: f64 = 1.0;

/// Configuration for self-play.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub episodes: usize,

    /// Seed for the run's RNG.
    pub seed: u64,

    /// Board every episode starts from.
    pub game: GameConfig,

    /// Log progress every this many episodes (0 = only at the end).
    pub log_interval: usize,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            episodes: 10_000,
            seed: 42,
            game: GameConfig::default(),
            log_interval: 1_000,
        }
    }
}

impl SelfPlayConfig {
    /// Create a new self-play config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of episodes.
    #[must_use]
    pub fn with_episodes(mut self, episodes: usize) -> Self {
        self.episodes = episodes;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the starting piles.
    #[must_use]
    pub fn with_piles(mut self, piles: impl Into<Piles>) -> Self {
        self.game = self.game.with_piles(piles);
        self
    }

    /// Set the progress logging interval.
    #[must_use]
    pub fn with_log_interval(mut self, interval: usize) -> Self {
        self.log_interval = interval;
        self
    }
}

/// Each player's last `(state, action)` still waiting for credit.
pub type PendingMoves = PlayerMap<Option<(Piles, Action)>>;

/// How a single self-play game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EpisodeOutcome {
    /// Player recorded as winner by the game.
    pub winner: PlayerId,

    /// Moves made in the game.
    pub moves: usize,
}

/// Runs self-play episodes against a learner.
#[derive(Clone, Debug)]
pub struct SelfPlayTrainer {
    config: SelfPlayConfig,
}

impl SelfPlayTrainer {
    /// Create a trainer. Fails if the configured board cannot be played.
    pub fn new(config: SelfPlayConfig) -> Result<Self> {
        config.game.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &SelfPlayConfig {
        &self.config
    }

    /// Play the configured number of episodes with an RNG seeded from the config.
    pub fn train(&self, learner: &mut QLearner) -> Result<TrainingStats> {
        let mut rng = GameRng::new(self.config.seed);
        self.train_with_rng(learner, &mut rng)
    }

    /// Play the configured number of episodes drawing from `rng`.
    pub fn train_with_rng(&self, learner: &mut QLearner, rng: &mut GameRng) -> Result<TrainingStats> {
        let mut stats = TrainingStats::default();

        for episode in 1..=self.config.episodes {
            let outcome = self.play_episode(learner, rng)?;
            stats.record(outcome.winner, outcome.moves);
            debug!("Episode {}: {} moves, winner {}", episode, outcome.moves, outcome.winner);

            if self.config.log_interval > 0 && episode % self.config.log_interval == 0 {
                info!(
                    "Played {}/{} training games ({} Q-values)",
                    episode,
                    self.config.episodes,
                    learner.table().len()
                );
            }
        }

        stats.table_size = learner.table().len();
        info!(
            "Done training: {} episodes, {:.2} moves/game, {} Q-values",
            stats.episodes,
            stats.mean_moves(),
            stats.table_size
        );
        Ok(stats)
    }

    /// Play one game to completion, updating `learner` along the way.
    pub fn play_episode(&self, learner: &mut QLearner, rng: &mut GameRng) -> Result<EpisodeOutcome> {
        let mut game = Game::new(&self.config.game)?;
        let mut pending = PendingMoves::default();
        let mut moves = 0;

        loop {
            let state = game.piles().clone();
            let action = learner
                .choose_action(&state, true, rng)
                .ok_or_else(|| NimError::NoActionsAvailable { piles: state.clone() })?;

            pending[game.current_player()] = Some((state.clone(), action));

            game.apply_move(action)?;
            moves += 1;
            let new_state = game.piles();

            // The turn has passed, so `current_player` is the opponent of
            // the mover and its pending entry is the move before this one.
            let opponent_move = pending[game.current_player()].take();

            if let Some(winner) = game.winner() {
                learner.update(&state, action, new_state, LOSS_REWARD);
                if let Some((prior_state, prior_action)) = opponent_move {
                    learner.update(&prior_state, prior_action, new_state, WIN_REWARD);
                }
                return Ok(EpisodeOutcome { winner, moves });
            }

            if let Some((prior_state, prior_action)) = opponent_move {
                learner.update(&prior_state, prior_action, new_state, 0.0);
            }
        }
    }
}
