//! Startup data seeder.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` calls `run_seed` once after migrations when `SEED_DEFAULT_ADMIN` is
//! enabled. It guarantees a default admin account and a minimum number of demo
//! journal entries for that admin, and is a no-op on later boots.

use async_trait::async_trait;
use sqlx::PgPool;
use time::Date;
use uuid::Uuid;

use super::auth::{self, ROLE_ADMIN};
use super::band_event::{self, ValidBandEvent};
use super::password::{self, PasswordError};

pub const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "password";
pub const DEFAULT_DEMO_EVENTS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    pub enabled: bool,
    pub admin_email: String,
    pub admin_password: String,
    pub demo_events: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            admin_email: DEFAULT_ADMIN_EMAIL.to_owned(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_owned(),
            demo_events: DEFAULT_DEMO_EVENTS,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error(transparent)]
    Hash(#[from] PasswordError),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// What a seeding run changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub admin_created: bool,
    pub events_created: usize,
}

/// Persistence used by the seeder.
#[async_trait]
pub trait SeedStore: Send + Sync {
    async fn find_user_id(&self, email: &str) -> Result<Option<Uuid>, SeedError>;
    async fn create_user(&self, email: &str, password_hash: &str, role: &str) -> Result<Uuid, SeedError>;
    async fn count_events(&self, user_id: Uuid) -> Result<usize, SeedError>;
    async fn create_event(&self, user_id: Uuid, event: &ValidBandEvent) -> Result<(), SeedError>;
}

#[async_trait]
impl SeedStore for PgPool {
    async fn find_user_id(&self, email: &str) -> Result<Option<Uuid>, SeedError> {
        Ok(auth::find_user_by_email(self, email).await?.map(|u| u.id))
    }

    async fn create_user(&self, email: &str, password_hash: &str, role: &str) -> Result<Uuid, SeedError> {
        Ok(auth::create_user(self, email, password_hash, role).await?)
    }

    async fn count_events(&self, user_id: Uuid) -> Result<usize, SeedError> {
        Ok(band_event::count_events(self, user_id).await?)
    }

    async fn create_event(&self, user_id: Uuid, event: &ValidBandEvent) -> Result<(), SeedError> {
        band_event::create_event(self, user_id, event).await?;
        Ok(())
    }
}

/// Placeholder entry number `index` (zero based).
#[must_use]
pub fn dummy_band_event(index: usize, today: Date) -> ValidBandEvent {
    let n = index + 1;
    ValidBandEvent {
        band_name: format!("Bandname{n}"),
        place: format!("here{n}"),
        date: today,
        rating: 0,
        comment: Some(format!("comment{n}")),
    }
}

/// Ensure the admin account and its demo entries exist.
///
/// # Errors
///
/// Returns an error when hashing or the store fails.
pub async fn run_seed<S: SeedStore + ?Sized>(store: &S, config: &SeedConfig, today: Date) -> Result<SeedReport, SeedError> {
    let mut report = SeedReport::default();
    let email = auth::normalize_email(&config.admin_email).unwrap_or_else(|| config.admin_email.clone());

    if store.find_user_id(&email).await?.is_none() {
        let hash = password::hash_password(&config.admin_password)?;
        store.create_user(&email, &hash, ROLE_ADMIN).await?;
        report.admin_created = true;
        tracing::info!(%email, "default admin user created");
    } else {
        tracing::info!(%email, "default admin user already exists");
    }

    let Some(admin_id) = store.find_user_id(&email).await? else {
        tracing::warn!(%email, "admin user not found; skipping demo events");
        return Ok(report);
    };

    let existing = store.count_events(admin_id).await?;
    if existing >= config.demo_events {
        tracing::info!(existing, "admin already has demo events");
        return Ok(report);
    }

    for index in existing..config.demo_events {
        store.create_event(admin_id, &dummy_band_event(index, today)).await?;
        report.events_created += 1;
    }
    tracing::info!(created = report.events_created, "demo events created for admin");
    Ok(report)
}

#[cfg(test)]
#[path = "seed_test.rs"]
mod tests;
