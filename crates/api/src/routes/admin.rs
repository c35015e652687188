//! Admin dashboard routes
//!
//! Reachable only through the session gate. A failed query is logged and
//! rendered as an empty list; the dashboard never shows a database error.

use axum::{extract::State, Json};
use leadportal_shared::{Appointment, Lead, RECENT_LEADS_LIMIT};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct LeadListResponse {
    pub leads: Vec<Lead>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct AppointmentListResponse {
    pub appointments: Vec<Appointment>,
    pub count: usize,
}

/// GET /admin - most recent leads
pub async fn list_leads(State(state): State<AppState>) -> Json<LeadListResponse> {
    let leads = match state.store.recent_leads(RECENT_LEADS_LIMIT).await {
        Ok(leads) => leads,
        Err(e) => {
            tracing::error!(error = ?e, "Error fetching leads");
            Vec::new()
        }
    };

    Json(LeadListResponse {
        count: leads.len(),
        leads,
    })
}

/// GET /admin/calendar - scheduled appointments
pub async fn list_appointments(State(state): State<AppState>) -> Json<AppointmentListResponse> {
    let appointments = match state.store.appointments().await {
        Ok(appointments) => appointments,
        Err(e) => {
            tracing::error!(error = ?e, "Error fetching appointments");
            Vec::new()
        }
    };

    Json(AppointmentListResponse {
        count: appointments.len(),
        appointments,
    })
}
