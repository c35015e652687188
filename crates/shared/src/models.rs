//! Row models for the `leads` and `appointments` tables

use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// A sales lead captured by the chat assistant
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Lead {
    pub id: Uuid,
    pub phone_number: String,
    pub nombre: Option<String>,
    pub empresa: Option<String>,
    pub cargo: Option<String>,
    pub ciudad: Option<String>,
    pub email: Option<String>,
    pub bant_score: i32,
    /// Conversation state, e.g. `INICIO`, `AGENDADO`, `DESCARTADO`
    pub fsm_state: String,
    pub message_count: i32,
    pub source: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub last_message_at: Option<OffsetDateTime>,
}

/// A scheduled meeting, joined with the lead it belongs to
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Appointment {
    pub id: Uuid,
    pub lead_id: Uuid,
    pub meeting_link: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub scheduled_at: OffsetDateTime,
    pub duration_minutes: i32,
    /// One of `scheduled`, `completed`, `cancelled`, `no_show`
    pub status: String,
    /// Lead name; `None` when the lead row is gone or has no name yet
    pub lead_nombre: Option<String>,
    pub lead_phone_number: Option<String>,
}
