//! Ordered store of usage rows.
//!
//! The store owns the single total order the table displays. Rows are
//! only mutated through the operations here; a reorder is always a
//! permutation of the existing id set.

use thiserror::Error;
use tracing::warn;

use crate::usage::{seed_rows, RowId, UsageRow};

/// Errors from store construction and the insert/update extension points
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("duplicate row id: {0}")]
    DuplicateId(RowId),
    #[error("row {0} has a zero limit")]
    ZeroLimit(RowId),
    #[error("unknown row id: {0}")]
    UnknownId(RowId),
}

/// Ordered sequence of usage rows
#[derive(Debug, Clone, Default)]
pub struct RowStore {
    rows: Vec<UsageRow>,
}

impl RowStore {
    /// Build a store from rows, validating id uniqueness and positive
    /// limits. Authored statuses that disagree with the derived
    /// `Exceeded iff used > limit` rule are accepted with a warning.
    pub fn new(rows: Vec<UsageRow>) -> Result<Self, StoreError> {
        for (i, row) in rows.iter().enumerate() {
            if row.limit == 0 {
                return Err(StoreError::ZeroLimit(row.id.clone()));
            }
            if rows[..i].iter().any(|r| r.id == row.id) {
                return Err(StoreError::DuplicateId(row.id.clone()));
            }
            if !row.status_consistent() {
                warn!(id = %row.id, model = %row.model, "row status disagrees with used/limit");
            }
        }
        Ok(Self { rows })
    }

    /// Store pre-populated with the seed fixture rows
    pub fn seeded() -> Self {
        // Fixtures are validated by test; construction cannot fail here
        Self::new(seed_rows()).unwrap_or_default()
    }

    /// Current order, read-only
    pub fn rows(&self) -> &[UsageRow] {
        &self.rows
    }

    /// Row ids in display order
    pub fn ids(&self) -> Vec<RowId> {
        self.rows.iter().map(|r| r.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up a row by id
    pub fn get(&self, id: &str) -> Option<&UsageRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Position of a row in the current order
    pub fn position(&self, id: &str) -> Option<usize> {
        self.rows.iter().position(|r| r.id == id)
    }

    /// Row at a display position
    pub fn at(&self, index: usize) -> Option<&UsageRow> {
        self.rows.get(index)
    }

    /// Move `moved_id` to the anchor's slot: the row is removed from
    /// its current position and reinserted where the anchor sits
    /// after the removal, so the anchor and everything behind it
    /// shift down by one. No-op when `moved_id == anchor_id` or
    /// either id is absent.
    pub fn reorder(&mut self, moved_id: &str, anchor_id: &str) {
        if moved_id == anchor_id {
            return;
        }
        let Some(from) = self.position(moved_id) else {
            return;
        };
        if self.position(anchor_id).is_none() {
            return;
        }
        let moved = self.rows.remove(from);
        // Anchor index re-resolved after removal; it always exists here
        let to = self.position(anchor_id).unwrap_or(self.rows.len());
        self.rows.insert(to, moved);
    }

    /// Insert a new row at the end. Extension point; the current UI
    /// never creates rows, but the id-uniqueness contract must hold
    /// if it ever does.
    pub fn insert(&mut self, row: UsageRow) -> Result<(), StoreError> {
        if row.limit == 0 {
            return Err(StoreError::ZeroLimit(row.id.clone()));
        }
        if self.position(&row.id).is_some() {
            return Err(StoreError::DuplicateId(row.id.clone()));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Replace an existing row in place, keeping its position
    pub fn update(&mut self, row: UsageRow) -> Result<(), StoreError> {
        if row.limit == 0 {
            return Err(StoreError::ZeroLimit(row.id.clone()));
        }
        match self.position(&row.id) {
            Some(i) => {
                self.rows[i] = row;
                Ok(())
            }
            None => Err(StoreError::UnknownId(row.id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usage::UsageStatus;
    use pretty_assertions::assert_eq;

    fn test_row(id: &str) -> UsageRow {
        UsageRow {
            id: id.to_string(),
            model: format!("Model {}", id),
            status: UsageStatus::Active,
            used: 100,
            limit: 1_000,
            reviewer: "Reviewer".to_string(),
        }
    }

    fn store(ids: &[&str]) -> RowStore {
        RowStore::new(ids.iter().map(|id| test_row(id)).collect()).unwrap()
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let rows = vec![test_row("a"), test_row("a")];
        assert_eq!(
            RowStore::new(rows).unwrap_err(),
            StoreError::DuplicateId("a".to_string())
        );
    }

    #[test]
    fn test_new_rejects_zero_limit() {
        let mut row = test_row("a");
        row.limit = 0;
        assert_eq!(
            RowStore::new(vec![row]).unwrap_err(),
            StoreError::ZeroLimit("a".to_string())
        );
    }

    #[test]
    fn test_seeded_store() {
        let store = RowStore::seeded();
        assert_eq!(store.len(), 8);
        assert_eq!(store.at(0).unwrap().model, "GPT-4 Turbo");
    }

    #[test]
    fn test_reorder_moves_to_anchor_slot() {
        // Moving up: c takes b's slot, b shifts down
        let mut s = store(&["a", "b", "c", "d"]);
        s.reorder("c", "b");
        assert_eq!(s.ids(), vec!["a", "c", "b", "d"]);

        // Moving down: a takes c's post-removal slot
        let mut s = store(&["a", "b", "c", "d"]);
        s.reorder("a", "c");
        assert_eq!(s.ids(), vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_reorder_is_a_permutation() {
        let mut s = store(&["a", "b", "c", "d", "e"]);
        let mut before = s.ids();
        before.sort();

        s.reorder("e", "a");
        s.reorder("b", "d");
        s.reorder("c", "e");

        let mut after = s.ids();
        after.sort();
        assert_eq!(before, after);
        assert_eq!(s.len(), 5);
    }

    #[test]
    fn test_reorder_noop_guards() {
        let mut s = store(&["a", "b", "c"]);
        let before = s.ids();

        s.reorder("a", "a");
        assert_eq!(s.ids(), before);

        s.reorder("zzz", "b");
        assert_eq!(s.ids(), before);

        s.reorder("b", "zzz");
        assert_eq!(s.ids(), before);
    }

    #[test]
    fn test_insert_preserves_uniqueness() {
        let mut s = store(&["a", "b"]);
        assert!(s.insert(test_row("c")).is_ok());
        assert_eq!(
            s.insert(test_row("a")).unwrap_err(),
            StoreError::DuplicateId("a".to_string())
        );
        assert_eq!(s.ids(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_update_keeps_position() {
        let mut s = store(&["a", "b", "c"]);
        let mut row = test_row("b");
        row.used = 999;
        s.update(row).unwrap();
        assert_eq!(s.position("b"), Some(1));
        assert_eq!(s.get("b").unwrap().used, 999);

        assert_eq!(
            s.update(test_row("zzz")).unwrap_err(),
            StoreError::UnknownId("zzz".to_string())
        );
    }
}
