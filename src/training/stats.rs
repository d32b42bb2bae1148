//! Aggregate statistics for a training run.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};

/// Counters collected while training.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingStats {
    /// Episodes played to completion.
    pub episodes: u64,

    /// Games each player was recorded as winner of.
    pub wins: PlayerMap<u64>,

    /// Moves made across all episodes.
    pub total_moves: u64,

    /// Q-table entries after the last episode.
    pub table_size: usize,
}

impl TrainingStats {
    /// Record one finished episode.
    pub fn record(&mut self, winner: PlayerId, moves: usize) {
        self.episodes += 1;
        self.wins[winner] += 1;
        self.total_moves += moves as u64;
    }

    /// Mean moves per episode (0 before any episode).
    #[must_use]
    pub fn mean_moves(&self) -> f64 {
        if self.episodes == 0 {
            0.0
        } else {
            self.total_moves as f64 / self.episodes as f64
        }
    }

    /// Fraction of episodes recorded as won by `player`.
    #[must_use]
    pub fn win_rate(&self, player: PlayerId) -> f64 {
        if self.episodes == 0 {
            0.0
        } else {
            self.wins[player] as f64 / self.episodes as f64
        }
    }
}
