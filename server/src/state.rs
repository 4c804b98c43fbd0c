//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the database pool and the parsed configuration; both are cheap to
//! clone.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool, config: AppConfig) -> Self {
        Self { pool, config: Arc::new(config) }
    }
}
