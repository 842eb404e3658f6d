//! quotadeck binary crate: configuration, application state and the
//! terminal UI. The domain types live in `quotadeck-core`.

pub mod config;
pub mod state;
pub mod ui;
