use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::reporter::{DatabaseStatus, HealthReport};

/// Top-level indicator. The endpoint answering at all is what it reports,
/// so it has a single value.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    Healthy,
}

impl OverallStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
        }
    }
}

/// Reachability of one dependency as seen by clients.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ServiceState {
    Ok,
    Error,
}

impl ServiceState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Error => "error",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct ServicesStatus {
    pub database: ServiceState,
    pub redis: ServiceState,
}

/// # Health Status Response
///
/// Serialized form of a [`HealthReport`]. Failure kinds are collapsed to
/// `error` here.
///
/// ## Fields
/// - `status`: always `"healthy"`
/// - `timestamp`: ISO 8601 UTC timestamp with second precision
/// - `services`: `"ok"` or `"error"` for `database` and `redis`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct HealthResponse {
    pub status: OverallStatus,
    #[schema(example = "2024-03-10T15:30:45Z")]
    pub timestamp: String,
    pub services: ServicesStatus,
}

impl From<&HealthReport> for HealthResponse {
    fn from(report: &HealthReport) -> Self {
        let database = match report.database {
            DatabaseStatus::Active => ServiceState::Ok,
            DatabaseStatus::Inactive => ServiceState::Error,
        };
        let redis = if report.cache.is_ok() {
            ServiceState::Ok
        } else {
            ServiceState::Error
        };

        Self {
            status: OverallStatus::Healthy,
            timestamp: report
                .generated_at
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            services: ServicesStatus { database, redis },
        }
    }
}

impl From<HealthReport> for HealthResponse {
    fn from(report: HealthReport) -> Self {
        Self::from(&report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probes::CacheStatus;
    use chrono::{DateTime, TimeZone, Utc};

    fn report(database: DatabaseStatus, cache: CacheStatus) -> HealthReport {
        HealthReport {
            generated_at: Utc.with_ymd_and_hms(2024, 3, 10, 15, 30, 45).unwrap(),
            database,
            cache,
        }
    }

    #[test]
    fn test_all_ok_serialization() {
        let response = HealthResponse::from(report(DatabaseStatus::Active, CacheStatus::Ok));
        let json = serde_json::to_value(&response).expect("Should serialize to JSON");

        assert_eq!(
            json,
            serde_json::json!({
                "status": "healthy",
                "timestamp": "2024-03-10T15:30:45Z",
                "services": { "database": "ok", "redis": "ok" }
            })
        );
    }

    #[test]
    fn test_every_cache_failure_collapses_to_error() {
        let failures = [
            CacheStatus::Unreachable("Connection refused".to_string()),
            CacheStatus::ProtocolError("SimpleString(\"PANG\")".to_string()),
            CacheStatus::Misconfigured("REDIS_URL is not set".to_string()),
        ];

        for cache in failures {
            let response = HealthResponse::from(report(DatabaseStatus::Active, cache));
            assert_eq!(response.services.redis, ServiceState::Error);
            assert_eq!(response.status, OverallStatus::Healthy);
        }
    }

    #[test]
    fn test_inactive_database_is_error_but_healthy() {
        let response = HealthResponse::from(report(DatabaseStatus::Inactive, CacheStatus::Ok));

        assert_eq!(response.services.database, ServiceState::Error);
        assert_eq!(response.services.redis, ServiceState::Ok);
        assert_eq!(response.status, OverallStatus::Healthy);
    }

    #[test]
    fn test_timestamp_is_iso8601() {
        let response = HealthResponse::from(HealthReport {
            generated_at: Utc::now(),
            database: DatabaseStatus::Active,
            cache: CacheStatus::Ok,
        });

        let parsed = DateTime::parse_from_rfc3339(&response.timestamp);
        assert!(parsed.is_ok(), "Timestamp should be valid RFC3339 format");
        assert!(response.timestamp.ends_with('Z'));
    }

    #[test]
    fn test_service_state_strings() {
        assert_eq!(ServiceState::Ok.as_str(), "ok");
        assert_eq!(ServiceState::Error.as_str(), "error");
        assert_eq!(OverallStatus::Healthy.as_str(), "healthy");
    }
}
