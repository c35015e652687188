//! Session gate middleware for Axum

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use super::{cookies::session_marker, cookies::SESSION_COOKIE_VALUE, LOGIN_PATH, PROTECTED_PREFIX};

/// What the gate does with a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    PassThrough,
    Redirect(&'static str),
}

/// `/admin` and anything under `/admin/`.
///
/// `/administrator` is a different route and stays public.
pub fn is_protected_path(path: &str) -> bool {
    match path.strip_prefix(PROTECTED_PREFIX) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Decide whether a request may proceed.
///
/// `session` is the raw value of the session cookie, if the request carried
/// one. Only the exact value `true` authenticates.
pub fn gate_decision(path: &str, session: Option<&str>) -> GateDecision {
    if !is_protected_path(path) {
        return GateDecision::PassThrough;
    }

    match session {
        Some(SESSION_COOKIE_VALUE) => GateDecision::PassThrough,
        _ => GateDecision::Redirect(LOGIN_PATH),
    }
}

/// Middleware that redirects unauthenticated requests for protected paths
/// to the login page
pub async fn session_gate(request: Request, next: Next) -> Response {
    let session = session_marker(request.headers());
    let has_cookie = session.is_some();
    let decision = gate_decision(request.uri().path(), session);

    match decision {
        GateDecision::PassThrough => next.run(request).await,
        GateDecision::Redirect(target) => {
            tracing::debug!(
                path = %request.uri().path(),
                has_cookie,
                "session_gate: no valid session, redirecting to login"
            );
            Redirect::temporary(target).into_response()
        }
    }
}
