//! Route guard: protected path prefixes require an authenticated
//! session; everything else passes through.

use tracing::debug;

/// Path prefixes that require an authenticated session
pub const PROTECTED_PREFIXES: &[&str] = &["/dashboard"];

/// Guard decision. There are exactly two outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Let the navigation through unmodified
    PassThrough,
    /// Send the visitor to the given path instead
    Redirect(String),
}

/// Decide whether `path` may be visited with the given auth state.
/// Unauthenticated visits to a protected prefix redirect to the root.
pub fn check(path: &str, authenticated: bool) -> RouteOutcome {
    let protected = PROTECTED_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix));

    if protected && !authenticated {
        debug!(path, "guard: redirecting unauthenticated visit");
        return RouteOutcome::Redirect("/".to_string());
    }
    RouteOutcome::PassThrough
}
