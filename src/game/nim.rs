//! Nim game state machine.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::core::{Action, ActionFault, GameConfig, NimError, Piles, PlayerId, Result};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// The player recorded as winner when the last object was taken.
    Winner(PlayerId),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
        }
    }
}

/// Enumerate every legal action for a pile configuration.
///
/// Returns `(i, j)` for every pile `i` with `piles[i] > 0` and every
/// `1 <= j <= piles[i]`, ordered by pile then count. Empty iff every
/// pile is zero.
///
/// ```
/// use nim_q::core::{Action, Piles};
/// use nim_q::game::available_actions;
///
/// let actions = available_actions(&Piles::from([0, 2]));
/// assert_eq!(actions, vec![Action::new(1, 1), Action::new(1, 2)]);
/// ```
#[must_use]
pub fn available_actions(piles: &Piles) -> Vec<Action> {
    let capacity = usize::try_from(piles.total()).unwrap_or(0);
    let mut actions = Vec::with_capacity(capacity);

    for (pile, size) in piles.iter() {
        actions.extend((1..=size).map(|count| Action::new(pile, count)));
    }

    actions
}

/// A game of Nim in progress or finished.
///
/// Invariant: `winner` is set if and only if every pile is zero. Once set,
/// `apply_move` rejects every further move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    piles: Piles,
    player: PlayerId,
    winner: Option<PlayerId>,
}

impl Default for Game {
    fn default() -> Self {
        let config = GameConfig::default();
        Self::start(config.initial_piles)
    }
}

impl Game {
    /// Start a game from a configuration. Player 0 moves first.
    pub fn new(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::start(config.initial_piles.clone()))
    }

    /// Start a game from explicit pile sizes.
    pub fn with_piles(piles: impl Into<Piles>) -> Result<Self> {
        Self::new(&GameConfig::new().with_piles(piles))
    }

    fn start(piles: Piles) -> Self {
        Self {
            piles,
            player: PlayerId::FIRST,
            winner: None,
        }
    }

    /// Current pile configuration.
    #[must_use]
    pub fn piles(&self) -> &Piles {
        &self.piles
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.player
    }

    /// Winner, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// True once a winner has been recorded.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.winner.map(GameResult::Winner)
    }

    /// Legal actions from the current piles.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        available_actions(&self.piles)
    }

    /// Make `action` for the current player.
    ///
    /// On success the pile shrinks by `action.count` and the turn passes to
    /// the other player. If that empties every pile, the winner is the
    /// player whose turn it now is, i.e. the one who did not just move.
    ///
    /// A rejected move leaves the game untouched.
    pub fn apply_move(&mut self, action: Action) -> Result<()> {
        if self.winner.is_some() {
            return Err(NimError::InvalidState);
        }

        let size = self
            .piles
            .get(action.pile)
            .ok_or_else(|| self.reject(action, ActionFault::PileOutOfRange))?;
        if action.count < 1 || action.count > size {
            return Err(self.reject(action, ActionFault::CountOutOfRange));
        }

        self.piles.remove(action.pile, action.count);
        let mover = self.player;
        self.player = self.player.other();

        if self.piles.is_exhausted() {
            self.winner = Some(self.player);
        }

        trace!("{} {} -> {} (winner: {:?})", mover, action, self.piles, self.winner);
        Ok(())
    }

    fn reject(&self, action: Action, fault: ActionFault) -> NimError {
        NimError::InvalidAction {
            action,
            piles: self.piles.clone(),
            fault,
        }
    }
}
