//! Row selection set and the tri-state header aggregate.

use std::collections::HashSet;

use crate::usage::RowId;

/// Aggregate selection state driving the header checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    /// No current row is selected
    None,
    /// Non-empty proper subset (header renders indeterminate)
    Some,
    /// Every current row is selected and the row set is non-empty
    All,
}

/// Set of selected row identifiers
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    ids: HashSet<RowId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the id if absent, remove it if present
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    /// Replace the selection with the given ids
    pub fn select_all<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<RowId>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Aggregate state against the store's *current* id set. Always
    /// recomputed from current membership: ids lingering in the
    /// selection for rows no longer in the store do not count, so a
    /// removed row can never produce a phantom `All`.
    pub fn aggregate(&self, current_ids: &[RowId]) -> Aggregate {
        let selected = current_ids.iter().filter(|id| self.ids.contains(*id)).count();
        if selected == 0 {
            Aggregate::None
        } else if selected == current_ids.len() {
            Aggregate::All
        } else {
            Aggregate::Some
        }
    }
}
