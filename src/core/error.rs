//! Error types for the Nim engine and learner.

use thiserror::Error;

use super::action::Action;
use super::piles::Piles;

/// Why an action was rejected by `Game::apply_move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionFault {
    /// The pile index is not smaller than the number of piles.
    PileOutOfRange,
    /// The count is zero or exceeds the objects left in the pile.
    CountOutOfRange,
}

impl std::fmt::Display for ActionFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionFault::PileOutOfRange => write!(f, "invalid pile"),
            ActionFault::CountOutOfRange => write!(f, "invalid number of objects"),
        }
    }
}

/// Main error type for the crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NimError {
    #[error("game already won")]
    InvalidState,

    #[error("{fault}: {action} on piles {piles}")]
    InvalidAction {
        action: Action,
        piles: Piles,
        fault: ActionFault,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("invalid player index {index} (expected 0 or 1)")]
    InvalidPlayer { index: u8 },

    #[error("non-terminal piles {piles} have no available actions")]
    NoActionsAvailable { piles: Piles },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using the crate's error type.
pub type Result<T> = std::result::Result<T, NimError>;

impl NimError {
    /// Wrap an I/O error with the operation that failed.
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        NimError::Io {
            operation: operation.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_action_message() {
        let err = NimError::InvalidAction {
            action: Action::new(4, 1),
            piles: Piles::from(vec![1, 3, 5, 7]),
            fault: ActionFault::PileOutOfRange,
        };
        assert_eq!(
            err.to_string(),
            "invalid pile: take 1 from pile 4 on piles [1, 3, 5, 7]"
        );
    }

    #[test]
    fn test_io_source_is_preserved() {
        use std::error::Error as _;

        let err = NimError::io(
            "read pile",
            std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "closed"),
        );
        assert_eq!(err.to_string(), "failed to read pile: closed");
        assert!(err.source().is_some());
    }
}
