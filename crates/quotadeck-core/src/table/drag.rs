//! Grab-reorder gesture state machine.
//!
//! Tracks one in-progress manual row move: which row was picked up
//! and which row it currently hovers over. Committing and cancelling
//! both return to `Idle`; only a drop mutates the store.

use crate::table::store::RowStore;
use crate::usage::RowId;

/// Gesture state. At most one gesture exists at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        dragged: RowId,
        hover: Option<RowId>,
    },
}

/// Controller for the grab-reorder gesture
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Id of the grabbed row, if a gesture is in progress
    pub fn dragged_id(&self) -> Option<&str> {
        match &self.state {
            DragState::Dragging { dragged, .. } => Some(dragged),
            DragState::Idle => None,
        }
    }

    /// Id of the current hover target, if any
    pub fn hover_id(&self) -> Option<&str> {
        match &self.state {
            DragState::Dragging { hover, .. } => hover.as_deref(),
            DragState::Idle => None,
        }
    }

    /// Start a gesture. A grab while another gesture is active
    /// replaces it; single-pointer input cannot hold two.
    pub fn grab(&mut self, id: &str) {
        self.state = DragState::Dragging {
            dragged: id.to_string(),
            hover: None,
        };
    }

    /// Update the hover target; last write wins. No-op when idle.
    pub fn hover_over(&mut self, id: &str) {
        if let DragState::Dragging { hover, .. } = &mut self.state {
            *hover = Some(id.to_string());
        }
    }

    /// Clear the hover target without ending the gesture
    pub fn hover_leave(&mut self) {
        if let DragState::Dragging { hover, .. } = &mut self.state {
            *hover = None;
        }
    }

    /// Drop onto `target`, ending the gesture. Commits
    /// `store.reorder(dragged, target)` when the target differs from
    /// the dragged row and both exist; returns whether the store
    /// changed.
    pub fn drop_on(&mut self, target: &str, store: &mut RowStore) -> bool {
        let DragState::Dragging { dragged, .. } = std::mem::take(&mut self.state) else {
            return false;
        };
        if dragged == target || store.position(&dragged).is_none() || store.position(target).is_none()
        {
            return false;
        }
        store.reorder(&dragged, target);
        true
    }

    /// Cancel the gesture (drop outside a target, Esc). Always
    /// returns to `Idle` without touching the store.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usage::{UsageRow, UsageStatus};
    use pretty_assertions::assert_eq;

    fn store(ids: &[&str]) -> RowStore {
        let rows = ids
            .iter()
            .map(|id| UsageRow {
                id: id.to_string(),
                model: format!("Model {}", id),
                status: UsageStatus::Active,
                used: 1,
                limit: 10,
                reviewer: "Reviewer".to_string(),
            })
            .collect();
        RowStore::new(rows).unwrap()
    }

    #[test]
    fn test_grab_over_drop_commits_once() {
        let mut s = store(&["a", "b", "c"]);
        let mut drag = DragController::new();

        drag.grab("a");
        drag.hover_over("b");
        assert_eq!(drag.hover_id(), Some("b"));

        let committed = drag.drop_on("b", &mut s);
        assert!(committed);
        assert_eq!(drag.state(), &DragState::Idle);
        assert_eq!(s.ids(), vec!["a", "b", "c"]); // a dropped before b keeps order
    }

    #[test]
    fn test_drop_reorders() {
        let mut s = store(&["a", "b", "c"]);
        let mut drag = DragController::new();

        drag.grab("c");
        drag.hover_over("a");
        assert!(drag.drop_on("a", &mut s));
        assert_eq!(s.ids(), vec!["c", "a", "b"]);
        assert_eq!(drag.state(), &DragState::Idle);
    }

    #[test]
    fn test_cancel_leaves_store_untouched() {
        let mut s = store(&["a", "b", "c"]);
        let before = s.ids();
        let mut drag = DragController::new();

        drag.grab("a");
        drag.hover_over("b");
        drag.cancel();

        assert_eq!(drag.state(), &DragState::Idle);
        assert_eq!(s.ids(), before);
    }

    #[test]
    fn test_drop_on_self_is_noop() {
        let mut s = store(&["a", "b"]);
        let mut drag = DragController::new();

        drag.grab("a");
        assert!(!drag.drop_on("a", &mut s));
        assert_eq!(drag.state(), &DragState::Idle);
        assert_eq!(s.ids(), vec!["a", "b"]);
    }

    #[test]
    fn test_drop_with_unknown_ids_is_noop() {
        let mut s = store(&["a", "b"]);
        let mut drag = DragController::new();

        drag.grab("ghost");
        assert!(!drag.drop_on("a", &mut s));
        assert_eq!(s.ids(), vec!["a", "b"]);

        drag.grab("a");
        assert!(!drag.drop_on("ghost", &mut s));
        assert_eq!(s.ids(), vec!["a", "b"]);
        assert_eq!(drag.state(), &DragState::Idle);
    }

    #[test]
    fn test_drop_while_idle_is_noop() {
        let mut s = store(&["a", "b"]);
        let mut drag = DragController::new();
        assert!(!drag.drop_on("a", &mut s));
        assert_eq!(s.ids(), vec!["a", "b"]);
    }

    #[test]
    fn test_hover_last_write_wins() {
        let mut drag = DragController::new();
        drag.grab("a");
        drag.hover_over("b");
        drag.hover_over("c");
        assert_eq!(drag.hover_id(), Some("c"));

        drag.hover_leave();
        assert_eq!(drag.hover_id(), None);
        assert!(drag.is_dragging());
    }

    #[test]
    fn test_new_grab_replaces_active_gesture() {
        let mut drag = DragController::new();
        drag.grab("a");
        drag.hover_over("b");
        drag.grab("c");
        assert_eq!(drag.dragged_id(), Some("c"));
        assert_eq!(drag.hover_id(), None);
    }

    #[test]
    fn test_hover_while_idle_is_noop() {
        let mut drag = DragController::new();
        drag.hover_over("a");
        assert_eq!(drag.state(), &DragState::Idle);
    }
}
