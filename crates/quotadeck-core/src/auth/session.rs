//! Session value shared by every consumer (header, landing, guard).
//!
//! The session is owned in one place and injected where it is read;
//! only `sign_in` and `sign_out` mutate it.

use serde::Serialize;

/// Signed-in user identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// Session being established (initial render)
    Loading,
    Authenticated,
    #[default]
    Unauthenticated,
}

/// The session object consumers read
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
    status: SessionStatus,
    token: Option<String>,
}

impl Session {
    /// Fresh unauthenticated session
    pub fn unauthenticated() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Session token, present only while authenticated
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    /// Establish the session for `user`, issuing a fresh token
    pub fn sign_in(&mut self, user: User) {
        self.token = Some(generate_token());
        self.user = Some(user);
        self.status = SessionStatus::Authenticated;
    }

    /// Tear the session down. Returns the post-logout redirect target.
    pub fn sign_out(&mut self) -> &'static str {
        self.user = None;
        self.token = None;
        self.status = SessionStatus::Unauthenticated;
        "/"
    }
}

/// Generate a new random session token
pub fn generate_token() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_unauthenticated() {
        let session = Session::unauthenticated();
        assert_eq!(session.status(), SessionStatus::Unauthenticated);
        assert!(session.user().is_none());
        assert!(session.token().is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_sign_in_and_out() {
        let mut session = Session::unauthenticated();
        session.sign_in(User {
            name: "Admin User".to_string(),
            email: "admin@aisaas.com".to_string(),
        });

        assert!(session.is_authenticated());
        assert_eq!(session.user().unwrap().email, "admin@aisaas.com");
        assert!(session.token().is_some());

        let redirect = session.sign_out();
        assert_eq!(redirect, "/");
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert!(session.token().is_none());
    }

    #[test]
    fn test_tokens_are_unique() {
        assert_ne!(generate_token(), generate_token());
    }
}
