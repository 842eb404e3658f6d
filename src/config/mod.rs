mod settings;

pub use settings::{Config, Settings, UiSettings};
