//! Interactive table state: the ordered row store, the selection set,
//! and the grab-reorder gesture controller.

pub mod drag;
pub mod selection;
pub mod store;

pub use drag::{DragController, DragState};
pub use selection::{Aggregate, SelectionSet};
pub use store::{RowStore, StoreError};
