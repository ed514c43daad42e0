//! Reporter fixtures shared by route and GraphQL tests.

use std::sync::Arc;

use crate::probes::{CacheStatus, MockCacheProbe, MockDatabaseProbe};
use crate::reporter::HealthReporter;

/// What the mocked database liveness query answers on every call.
#[derive(Debug, Clone, Copy)]
pub enum DatabaseAnswer {
    Active,
    Inactive,
    Fails,
}

pub fn reporter_with(database: DatabaseAnswer, cache: CacheStatus) -> HealthReporter {
    let mut database_probe = MockDatabaseProbe::new();
    database_probe
        .expect_is_active()
        .returning(move || match database {
            DatabaseAnswer::Active => Ok(true),
            DatabaseAnswer::Inactive => Ok(false),
            DatabaseAnswer::Fails => Err(sqlx::Error::PoolTimedOut),
        });

    let mut cache_probe = MockCacheProbe::new();
    cache_probe.expect_ping().returning(move || cache.clone());

    HealthReporter::new(Arc::new(database_probe), Arc::new(cache_probe))
}
