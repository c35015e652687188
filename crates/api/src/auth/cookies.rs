//! Session marker cookie
//!
//! The whole session lives in one unsigned cookie: `admin_session=true`.
//! There is no server-side session table, so logging out only means telling
//! the browser to drop the cookie.

use axum::http::{header::COOKIE, header::InvalidHeaderValue, HeaderMap, HeaderValue};

pub const SESSION_COOKIE_NAME: &str = "admin_session";

/// The only value that counts as an authenticated session
pub const SESSION_COOKIE_VALUE: &str = "true";

/// 24 hours
pub const SESSION_MAX_AGE_SECS: u64 = 60 * 60 * 24;

/// `Set-Cookie` value issued after a successful login
pub fn session_cookie() -> Result<HeaderValue, InvalidHeaderValue> {
    HeaderValue::from_str(&format!(
        "{SESSION_COOKIE_NAME}={SESSION_COOKIE_VALUE}; HttpOnly; Path=/; Max-Age={SESSION_MAX_AGE_SECS}"
    ))
}

/// `Set-Cookie` value that deletes the session marker
pub fn clear_session_cookie() -> Result<HeaderValue, InvalidHeaderValue> {
    HeaderValue::from_str(&format!(
        "{SESSION_COOKIE_NAME}=; HttpOnly; Path=/; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT"
    ))
}

/// Find a cookie by name in a single `Cookie` header value.
///
/// Returns the first match, the same cookie a browser lists first.
pub fn cookie_value<'a>(cookie_header: &'a str, name: &str) -> Option<&'a str> {
    cookie_header.split(';').find_map(|cookie| {
        let mut parts = cookie.trim().splitn(2, '=');
        match (parts.next(), parts.next()) {
            (Some(key), Some(value)) if key == name => Some(value),
            _ => None,
        }
    })
}

/// Session marker value from the request headers, if any.
///
/// HTTP/2 clients may split cookies over several `Cookie` headers, so every
/// header is searched in order.
pub fn session_marker(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .find_map(|cookies| cookie_value(cookies, SESSION_COOKIE_NAME))
}
