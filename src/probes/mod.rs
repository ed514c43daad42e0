//! # Dependency Probes
//!
//! The two collaborators the health check consumes. Each probe answers a
//! single liveness question about one dependency and is swapped for a mock
//! in tests.

use async_trait::async_trait;
use std::fmt;

/// PostgreSQL liveness via a pooled connection
pub mod database;

/// Redis round-trip via `PING`
pub mod cache;

pub use cache::RedisCacheProbe;
pub use database::PgDatabaseProbe;

/// Literal reply expected from the cache for a successful `PING`.
pub const ACK_TOKEN: &str = "PONG";

/// Outcome of a cache round-trip.
///
/// Only [`CacheStatus::Ok`] counts as reachable; the remaining variants keep
/// the failure kind for logs and are all reported as `error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheStatus {
    Ok,
    /// Connection refused, IO failure, timeout or server error.
    Unreachable(String),
    /// The server answered with something other than [`ACK_TOKEN`].
    ProtocolError(String),
    /// No URL configured, or the URL does not parse.
    Misconfigured(String),
}

impl CacheStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Display for CacheStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Unreachable(reason) => write!(f, "unreachable: {reason}"),
            Self::ProtocolError(reply) => write!(f, "unexpected reply: {reply}"),
            Self::Misconfigured(reason) => write!(f, "misconfigured: {reason}"),
        }
    }
}

/// Relational store liveness.
///
/// `Ok(false)` means the store answered "not active". An `Err` means the
/// question itself could not be asked and is left to the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    async fn is_active(&self) -> Result<bool, sqlx::Error>;
}

/// Cache store liveness. Implementations contain every failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheProbe: Send + Sync {
    async fn ping(&self) -> CacheStatus;
}
