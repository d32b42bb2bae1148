//! Interactive play against a trained learner.
//!
//! Text in, text out: any `BufRead` for the human's moves and any `Write`
//! for the board, so a match can run on a terminal or in a test.

pub mod human;

pub use human::{HumanMatch, Side};
