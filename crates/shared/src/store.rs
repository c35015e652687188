//! Read-only access to leads and appointments
//!
//! The portal never writes: leads and appointments are created by the chat
//! assistant backend. Two backends exist:
//! - [`PgPortalStore`] queries the hosted Postgres database
//! - [`MemoryPortalStore`] serves fixed rows, used when no `DATABASE_URL` is
//!   configured and in tests

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::StoreResult;
use crate::models::{Appointment, Lead};

/// Number of leads shown on the dashboard
pub const RECENT_LEADS_LIMIT: i64 = 50;

#[async_trait]
pub trait PortalStore: Send + Sync {
    /// Most recently created leads first, at most `limit` rows.
    async fn recent_leads(&self, limit: i64) -> StoreResult<Vec<Lead>>;

    /// All appointments, earliest `scheduled_at` first.
    async fn appointments(&self) -> StoreResult<Vec<Appointment>>;
}

/// Postgres-backed store
#[derive(Clone)]
pub struct PgPortalStore {
    pool: PgPool,
}

impl PgPortalStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PortalStore for PgPortalStore {
    async fn recent_leads(&self, limit: i64) -> StoreResult<Vec<Lead>> {
        let leads = sqlx::query_as::<_, Lead>(
            r#"
            SELECT
                id,
                phone_number,
                nombre,
                empresa,
                cargo,
                ciudad,
                email,
                bant_score,
                fsm_state,
                message_count,
                source,
                created_at,
                updated_at,
                last_message_at
            FROM leads
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(leads)
    }

    async fn appointments(&self) -> StoreResult<Vec<Appointment>> {
        let appointments = sqlx::query_as::<_, Appointment>(
            r#"
            SELECT
                a.id,
                a.lead_id,
                a.meeting_link,
                a.scheduled_at,
                a.duration_minutes,
                a.status,
                l.nombre AS lead_nombre,
                l.phone_number AS lead_phone_number
            FROM appointments a
            LEFT JOIN leads l ON l.id = a.lead_id
            ORDER BY a.scheduled_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(appointments)
    }
}

/// In-memory store with fixed contents
///
/// Applies the same ordering and limit rules as the Postgres queries so the
/// two backends are interchangeable.
#[derive(Debug, Clone, Default)]
pub struct MemoryPortalStore {
    leads: Vec<Lead>,
    appointments: Vec<Appointment>,
}

impl MemoryPortalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_leads(mut self, leads: Vec<Lead>) -> Self {
        self.leads = leads;
        self
    }

    pub fn with_appointments(mut self, appointments: Vec<Appointment>) -> Self {
        self.appointments = appointments;
        self
    }
}

#[async_trait]
impl PortalStore for MemoryPortalStore {
    async fn recent_leads(&self, limit: i64) -> StoreResult<Vec<Lead>> {
        let mut leads = self.leads.clone();
        leads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        leads.truncate(usize::try_from(limit.max(0)).unwrap_or(usize::MAX));
        Ok(leads)
    }

    async fn appointments(&self) -> StoreResult<Vec<Appointment>> {
        let mut appointments = self.appointments.clone();
        appointments.sort_by_key(|a| a.scheduled_at);
        Ok(appointments)
    }
}
