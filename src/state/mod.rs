mod store;

pub use store::{AppState, AuthField, AuthForm, AuthFormKind, Screen};
