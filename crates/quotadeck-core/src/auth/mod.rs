//! Auth surface: session value, credential validation, route guard.
//!
//! There is no backend. Sign-in succeeds for any well-formed
//! credentials and issues a local session token; the error paths
//! exist so a real provider can slot in behind the same types.

pub mod guard;
pub mod session;
pub mod validate;

pub use guard::{check, RouteOutcome, PROTECTED_PREFIXES};
pub use session::{Session, SessionStatus, User};
pub use validate::{authenticate, validate_login, validate_signup, AuthError, FieldErrors, FormState};
