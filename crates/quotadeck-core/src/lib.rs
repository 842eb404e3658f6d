//! Core library for quotadeck.
//!
//! Everything the dashboard shows lives here, free of any UI
//! dependency: usage rows and their ordered store, the selection set,
//! the grab-and-drop reorder gesture, the detail projection, the mock
//! analytics series, and the auth surface (session, form validation,
//! route guard).

pub mod auth;
pub mod detail;
pub mod metrics;
pub mod overview;
pub mod table;
pub mod usage;

pub use detail::{DetailProjector, DetailView, SeriesPoint, Trend, TrendDirection};
pub use table::{Aggregate, DragController, DragState, RowStore, SelectionSet};
pub use usage::{RowId, UsageRow, UsageStatus};
