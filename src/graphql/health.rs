use crate::models::health::HealthResponse;
use crate::reporter::HealthReporter;
use async_graphql::{Context, Object, Result, SimpleObject};
use tracing::error;

/// Per-dependency reachability, `"ok"` or `"error"`.
#[derive(Debug, SimpleObject)]
pub struct Services {
    pub database: String,
    pub redis: String,
}

/// GraphQL representation of service health status
///
/// Mirrors the REST health document field for field, with the same string
/// values.
#[derive(Debug)]
pub struct Health {
    pub status: String,
    pub timestamp: String,
    pub services: Services,
}

impl From<HealthResponse> for Health {
    fn from(response: HealthResponse) -> Self {
        Self {
            status: response.status.as_str().to_string(),
            timestamp: response.timestamp,
            services: Services {
                database: response.services.database.as_str().to_string(),
                redis: response.services.redis.as_str().to_string(),
            },
        }
    }
}

#[Object]
impl Health {
    /// Always `"healthy"` when the check completes
    async fn status(&self) -> &str {
        &self.status
    }

    /// ISO-8601 UTC timestamp of the check
    async fn timestamp(&self) -> &str {
        &self.timestamp
    }

    async fn services(&self) -> &Services {
        &self.services
    }
}

/// Root query type for health-related GraphQL operations
#[derive(Default)]
pub struct HealthQuery;

#[Object]
impl HealthQuery {
    /// Runs the database and cache checks.
    ///
    /// # Errors
    /// A failing database liveness query is returned as a GraphQL error,
    /// the counterpart of the REST endpoint's `500`.
    async fn health(&self, ctx: &Context<'_>) -> Result<Health> {
        let reporter = ctx.data::<HealthReporter>()?;
        let report = reporter.report().await.map_err(|e| {
            error!(error = %e, "Health query failed");
            e
        })?;

        Ok(Health::from(HealthResponse::from(&report)))
    }
}
