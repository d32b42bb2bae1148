//! Action representation: a pile index and a number of objects to remove.

use serde::{Deserialize, Serialize};

/// A Nim move: remove `count` objects from pile `pile`.
///
/// An action is only meaningful relative to a pile configuration; legality
/// (`pile < piles.len()` and `1 <= count <= piles[pile]`) is checked by
/// `Game::apply_move`, not here.
///
/// ## Example
///
/// ```
/// use nim_q::core::Action;
///
/// let action = Action::new(3, 2);
/// assert_eq!(action.pile, 3);
/// assert_eq!(action.count, 2);
/// assert_eq!(action.to_string(), "take 2 from pile 3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    /// Index of the pile to take from.
    pub pile: usize,

    /// Number of objects removed.
    pub count: u32,
}

impl Action {
    /// Create a new action.
    #[must_use]
    pub const fn new(pile: usize, count: u32) -> Self {
        Self { pile, count }
    }
}

impl From<(usize, u32)> for Action {
    fn from((pile, count): (usize, u32)) -> Self {
        Self::new(pile, count)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "take {} from pile {}", self.count, self.pile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_from_tuple() {
        assert_eq!(Action::from((3, 1)), Action::new(3, 1));
    }

    #[test]
    fn test_action_ordering() {
        let mut actions = vec![Action::new(1, 2), Action::new(0, 3), Action::new(1, 1)];
        actions.sort();
        assert_eq!(
            actions,
            vec![Action::new(0, 3), Action::new(1, 1), Action::new(1, 2)]
        );
    }

    #[test]
    fn test_action_hash() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let hash = |a: &Action| {
            let mut h = DefaultHasher::new();
            a.hash(&mut h);
            h.finish()
        };

        assert_eq!(hash(&Action::new(2, 4)), hash(&Action::new(2, 4)));
        assert_ne!(hash(&Action::new(2, 4)), hash(&Action::new(4, 2)));
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::new(2, 5);
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();

        assert_eq!(action, deserialized);
    }
}
