//! Human vs. learner match over line-oriented I/O.

use std::io::{BufRead, Write};

use log::debug;

use crate::core::{Action, GameConfig, GameRng, NimError, PlayerId, Result};
use crate::game::Game;
use crate::learning::QLearner;

/// Who is on each side of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Human,
    Ai,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Human => write!(f, "Human"),
            Side::Ai => write!(f, "AI"),
        }
    }
}

/// A single game between a human and a learner playing greedily.
pub struct HumanMatch<'a> {
    learner: &'a QLearner,
    human: PlayerId,
    config: GameConfig,
}

impl<'a> HumanMatch<'a> {
    /// Set up a match with the human playing as `human`.
    pub fn new(learner: &'a QLearner, human: PlayerId, config: GameConfig) -> Self {
        Self { learner, human, config }
    }

    /// Pick the human's seat uniformly at random.
    pub fn random_seat(rng: &mut GameRng) -> PlayerId {
        if rng.gen_range_usize(0..PlayerId::COUNT) == 0 {
            PlayerId::FIRST
        } else {
            PlayerId::SECOND
        }
    }

    fn side(&self, player: PlayerId) -> Side {
        if player == self.human {
            Side::Human
        } else {
            Side::Ai
        }
    }

    /// Play to the end and return the winning side.
    ///
    /// Illegal or unparseable input is rejected and asked for again. Input
    /// running out before the game ends is an `Io` error.
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W, rng: &mut GameRng) -> Result<Side> {
        let mut game = Game::new(&self.config)?;
        let write_err = |e: std::io::Error| NimError::io("write board", e);

        loop {
            writeln!(output).map_err(write_err)?;
            writeln!(output, "Piles:").map_err(write_err)?;
            for (index, size) in game.piles().iter() {
                writeln!(output, "Pile {}: {}", index, size).map_err(write_err)?;
            }
            writeln!(output).map_err(write_err)?;

            let action = match self.side(game.current_player()) {
                Side::Human => {
                    writeln!(output, "Your Turn").map_err(write_err)?;
                    self.read_human_move(&game, input, output)?
                }
                Side::Ai => {
                    writeln!(output, "AI's Turn").map_err(write_err)?;
                    let action = self
                        .learner
                        .choose_action(game.piles(), false, rng)
                        .ok_or_else(|| NimError::NoActionsAvailable {
                            piles: game.piles().clone(),
                        })?;
                    writeln!(output, "AI chose to take {} from pile {}.", action.count, action.pile)
                        .map_err(write_err)?;
                    action
                }
            };

            game.apply_move(action)?;

            if let Some(winner) = game.winner() {
                let side = self.side(winner);
                writeln!(output).map_err(write_err)?;
                writeln!(output, "GAME OVER").map_err(write_err)?;
                writeln!(output, "Winner is {}", side).map_err(write_err)?;
                debug!("Match over, {} ({}) wins", side, winner);
                return Ok(side);
            }
        }
    }

    fn read_human_move<R: BufRead, W: Write>(&self, game: &Game, input: &mut R, output: &mut W) -> Result<Action> {
        let legal = game.legal_actions();

        loop {
            let pile = prompt(input, output, "Choose Pile: ")?;
            let count = prompt(input, output, "Choose Count: ")?;

            if let (Ok(pile), Ok(count)) = (pile.parse::<usize>(), count.parse::<u32>()) {
                let action = Action::new(pile, count);
                if legal.contains(&action) {
                    return Ok(action);
                }
            }

            writeln!(output, "Invalid move, try again.").map_err(|e| NimError::io("write prompt", e))?;
        }
    }
}

/// Print `message`, then read one trimmed line.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<String> {
    write!(output, "{}", message).map_err(|e| NimError::io("write prompt", e))?;
    output.flush().map_err(|e| NimError::io("flush prompt", e))?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| NimError::io("read move", e))?;
    if read == 0 {
        return Err(NimError::io(
            "read move",
            std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "input closed"),
        ));
    }

    Ok(line.trim().to_string())
}
