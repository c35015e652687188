//! Admin authentication: shared password login and the session cookie gate

pub mod cookies;
pub mod credentials;
#[cfg(test)]
mod edge_case_tests;
pub mod middleware;

/// Every path at or below this prefix requires a session
pub const PROTECTED_PREFIX: &str = "/admin";

/// Landing page after a successful login
pub const ADMIN_HOME_PATH: &str = "/admin";

pub const LOGIN_PATH: &str = "/login";

pub use cookies::{clear_session_cookie, session_cookie, session_marker, SESSION_COOKIE_NAME};
pub use credentials::{AuthError, CredentialCheck, LoginOutcome};
pub use middleware::{gate_decision, is_protected_path, session_gate, GateDecision};
