//! Shared-password login check

use subtle::ConstantTimeEq;
use thiserror::Error;

use super::ADMIN_HOME_PATH;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Incorrect password")]
    PasswordMismatch,
}

/// Result of a login attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Password accepted: issue the session cookie and send the browser here
    Redirect(&'static str),
    /// Password rejected: show this message, leave cookies alone
    Error(String),
}

/// Compares submitted passwords against the configured admin password
///
/// The password is injected at construction so the check never touches the
/// process environment.
#[derive(Clone)]
pub struct CredentialCheck {
    secret: Option<String>,
}

impl CredentialCheck {
    /// `None` (or an empty string) disables login entirely.
    pub fn new(secret: Option<String>) -> Self {
        Self {
            secret: secret.filter(|s| !s.is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }

    /// Exact, case-sensitive comparison. Missing or empty input never matches.
    pub fn verify(&self, submitted: Option<&str>) -> LoginOutcome {
        match (self.secret.as_deref(), submitted) {
            (Some(secret), Some(submitted))
                if !submitted.is_empty() && constant_time_eq(secret, submitted) =>
            {
                LoginOutcome::Redirect(ADMIN_HOME_PATH)
            }
            _ => LoginOutcome::Error(AuthError::PasswordMismatch.to_string()),
        }
    }
}

impl std::fmt::Debug for CredentialCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialCheck")
            .field("configured", &self.is_configured())
            .finish()
    }
}

fn constant_time_eq(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}
