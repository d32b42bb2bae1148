//! Sparse Q-value table.

use rustc_hash::FxHashMap;

use crate::core::{Action, Piles};

/// Q-values keyed by `(state, action)`.
///
/// Stored as state -> (action -> value) so lookups borrow the state
/// instead of cloning it into a composite key. Entries are only ever
/// inserted or overwritten, never removed.
#[derive(Clone, Debug, Default)]
pub struct QTable {
    values: FxHashMap<Piles, FxHashMap<Action, f64>>,
    len: usize,
}

impl QTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored value for `(state, action)`, or `None` if never written.
    #[must_use]
    pub fn get(&self, state: &Piles, action: Action) -> Option<f64> {
        self.values.get(state)?.get(&action).copied()
    }

    /// Write a value. The state is copied into an owned key.
    pub fn set(&mut self, state: &Piles, action: Action, value: f64) {
        if let Some(row) = self.values.get_mut(state) {
            if row.insert(action, value).is_none() {
                self.len += 1;
            }
            return;
        }
        self.values.entry(state.clone()).or_default().insert(action, value);
        self.len += 1;
    }

    /// Number of `(state, action)` entries stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if nothing has been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct states with at least one entry.
    #[must_use]
    pub fn state_count(&self) -> usize {
        self.values.len()
    }

    /// Iterate over all `(state, action, value)` entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&Piles, Action, f64)> + '_ {
        self.values
            .iter()
            .flat_map(|(state, row)| row.iter().map(move |(&action, &value)| (state, action, value)))
    }
}
