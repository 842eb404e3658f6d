//! Credential form validation and the sign-in stub.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::session::User;

/// Minimum password length for both forms
const MIN_PASSWORD_LEN: usize = 6;
/// Minimum display-name length for signup
const MIN_NAME_LEN: usize = 2;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Pragmatic shape check, not RFC 5322
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid")
});

/// Sign-in failure, surfaced as a single top-level message
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,
}

/// Per-field validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Vec<String>,
    pub email: Vec<String>,
    pub password: Vec<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.password.is_empty()
    }
}

/// Outcome of a form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub success: bool,
    pub message: String,
    pub errors: FieldErrors,
}

impl FormState {
    fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            errors: FieldErrors::default(),
        }
    }

    fn failed(message: &str, errors: FieldErrors) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            errors,
        }
    }
}

/// Validate login credentials: email format plus password length
pub fn validate_login(email: &str, password: &str) -> FormState {
    let mut errors = FieldErrors::default();
    check_email(email, &mut errors);
    check_password(password, &mut errors);

    if errors.is_empty() {
        FormState::ok("Signed in")
    } else {
        FormState::failed("Check the highlighted fields", errors)
    }
}

/// Validate signup fields: name length, email format, password length
pub fn validate_signup(name: &str, email: &str, password: &str) -> FormState {
    let mut errors = FieldErrors::default();
    if name.trim().chars().count() < MIN_NAME_LEN {
        errors
            .name
            .push(format!("Name must be at least {} characters", MIN_NAME_LEN));
    }
    check_email(email, &mut errors);
    check_password(password, &mut errors);

    if errors.is_empty() {
        FormState::ok("Account created")
    } else {
        FormState::failed("Check the highlighted fields", errors)
    }
}

fn check_email(email: &str, errors: &mut FieldErrors) {
    if !EMAIL_RE.is_match(email) {
        errors
            .email
            .push("Enter a valid email address".to_string());
    }
}

fn check_password(password: &str, errors: &mut FieldErrors) {
    if password.chars().count() < MIN_PASSWORD_LEN {
        errors.password.push(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }
}

/// Perform the sign-in attempt for already-validated credentials.
/// Stub: no backend is wired up, so any validated credential pair
/// yields a user whose display name is derived from the email local
/// part. The error variant is the recoverable failure path a real
/// provider would use.
pub fn authenticate(email: &str, _password: &str) -> Result<User, AuthError> {
    let local = email.split('@').next().ok_or(AuthError::InvalidCredentials)?;
    Ok(User {
        name: display_name(local),
        email: email.to_string(),
    })
}

/// "jane.doe" -> "Jane Doe"
fn display_name(local: &str) -> String {
    local
        .split(['.', '_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_login_rejects_bad_email_and_short_password() {
        let state = validate_login("bad", "12345");
        assert!(!state.success);
        assert_eq!(state.errors.email.len(), 1);
        assert_eq!(state.errors.password.len(), 1);
        assert!(state.errors.name.is_empty());
    }

    #[test]
    fn test_login_accepts_valid_credentials() {
        let state = validate_login("a@b.com", "123456");
        assert!(state.success);
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_signup_requires_name() {
        let state = validate_signup("J", "a@b.com", "123456");
        assert!(!state.success);
        assert_eq!(state.errors.name.len(), 1);
        assert!(state.errors.email.is_empty());
        assert!(state.errors.password.is_empty());

        let state = validate_signup("Jo", "a@b.com", "123456");
        assert!(state.success);
    }

    #[test]
    fn test_signup_collects_all_field_errors() {
        let state = validate_signup("", "not-an-email", "123");
        assert!(!state.success);
        assert!(!state.errors.name.is_empty());
        assert!(!state.errors.email.is_empty());
        assert!(!state.errors.password.is_empty());
    }

    #[test]
    fn test_email_shape() {
        for good in ["a@b.com", "jane.doe@example.org", "x+y@sub.domain.io"] {
            assert!(validate_login(good, "123456").success, "{good}");
        }
        for bad in ["", "plain", "a@b", "a b@c.com", "@b.com"] {
            assert!(!validate_login(bad, "123456").success, "{bad}");
        }
    }

    #[test]
    fn test_authenticate_derives_display_name() {
        let user = authenticate("jane.doe@example.org", "123456").unwrap();
        assert_eq!(user.name, "Jane Doe");
        assert_eq!(user.email, "jane.doe@example.org");

        let user = authenticate("admin@aisaas.com", "123456").unwrap();
        assert_eq!(user.name, "Admin");
    }
}
