//! Application state

use std::sync::Arc;

use leadportal_shared::{create_pool, MemoryPortalStore, PgPortalStore, PortalStore, StoreResult};

use crate::{auth::CredentialCheck, config::Config};

/// Shared application state
///
/// Everything in here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PortalStore>,
    pub credentials: CredentialCheck,
}

impl AppState {
    pub fn new(store: Arc<dyn PortalStore>, credentials: CredentialCheck) -> Self {
        Self { store, credentials }
    }

    /// Build state from configuration, connecting to Postgres when a
    /// `DATABASE_URL` is set
    pub async fn from_config(config: &Config) -> StoreResult<Self> {
        let credentials = CredentialCheck::new(config.admin_password.clone());
        if credentials.is_configured() {
            tracing::info!("Admin password login enabled");
        } else {
            tracing::warn!("ADMIN_PASSWORD not set - every login attempt will be rejected");
        }

        let store: Arc<dyn PortalStore> = match &config.database_url {
            Some(url) => {
                tracing::info!("Connecting to database...");
                let pool = create_pool(url, config.database_max_connections).await?;
                tracing::info!("Database connection established");
                Arc::new(PgPortalStore::new(pool))
            }
            None => {
                tracing::warn!("DATABASE_URL not set - serving an empty in-memory store");
                Arc::new(MemoryPortalStore::new())
            }
        };

        Ok(Self::new(store, credentials))
    }
}
