// Test code patterns:
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Lead Portal shared crate
//!
//! Database access shared by the portal binaries: connection pooling,
//! the lead/appointment row models and the read-only [`PortalStore`].

pub mod db;
pub mod error;
pub mod models;
pub mod store;

pub use db::create_pool;
pub use error::{StoreError, StoreResult};
pub use models::{Appointment, Lead};
pub use store::{MemoryPortalStore, PgPortalStore, PortalStore, RECENT_LEADS_LIMIT};
