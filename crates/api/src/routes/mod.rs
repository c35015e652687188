//! HTTP routes

pub mod admin;
pub mod health;
pub mod session;

use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Router,
};

use crate::{auth::session_gate, state::AppState};

/// Build the portal router.
///
/// The session gate wraps every route and the fallback, so protected paths
/// are checked before any handler runs.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/login", get(session::login_page).post(session::login))
        .route("/logout", post(session::logout))
        .route("/admin", get(admin::list_leads))
        .route("/admin/calendar", get(admin::list_appointments))
        .route("/health", get(health::health))
        .fallback(|| async { StatusCode::NOT_FOUND })
        .layer(middleware::from_fn(session_gate))
        .with_state(state)
}
