//! Usage rows, the entities the dashboard table displays.

pub mod fixtures;
pub mod types;

pub use fixtures::seed_rows;
pub use types::{format_compact, format_grouped, RowId, UsageRow, UsageStatus};
