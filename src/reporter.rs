//! # Health Reporter
//!
//! Runs the dependency checks for one request and assembles a
//! [`HealthReport`]. The reporter holds no mutable state and is shared
//! across workers.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::error::AppResult;
use crate::probes::{CacheProbe, CacheStatus, DatabaseProbe};

/// Answer of the relational store liveness query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseStatus {
    Active,
    Inactive,
}

impl From<bool> for DatabaseStatus {
    fn from(active: bool) -> Self {
        if active { Self::Active } else { Self::Inactive }
    }
}

/// Result of a single health check, before it is collapsed into the
/// serialized [`HealthResponse`](crate::models::health::HealthResponse).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    pub generated_at: DateTime<Utc>,
    pub database: DatabaseStatus,
    pub cache: CacheStatus,
}

#[derive(Clone)]
pub struct HealthReporter {
    database: Arc<dyn DatabaseProbe>,
    cache: Arc<dyn CacheProbe>,
}

impl HealthReporter {
    pub fn new(database: Arc<dyn DatabaseProbe>, cache: Arc<dyn CacheProbe>) -> Self {
        info!("Initializing health reporter");
        Self { database, cache }
    }

    /// Checks the database, then the cache, and stamps the result.
    ///
    /// # Errors
    ///
    /// A failure of the database liveness query is returned as-is. Cache
    /// failures never surface here; they are folded into
    /// [`HealthReport::cache`].
    #[instrument(skip_all)]
    pub async fn report(&self) -> AppResult<HealthReport> {
        let database = DatabaseStatus::from(self.database.is_active().await?);

        let cache = self.cache.ping().await;
        if !cache.is_ok() {
            warn!(%cache, "Cache check failed");
        }

        debug!(?database, cache_ok = cache.is_ok(), "Health check completed");

        Ok(HealthReport {
            generated_at: Utc::now(),
            database,
            cache,
        })
    }
}
