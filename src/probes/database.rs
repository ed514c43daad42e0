use async_trait::async_trait;
use sqlx::{Connection, PgPool};
use tracing::{debug, instrument};

use super::DatabaseProbe;

/// Asks the pool whether a connection is currently usable.
#[derive(Clone)]
pub struct PgDatabaseProbe {
    pool: PgPool,
}

impl PgDatabaseProbe {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DatabaseProbe for PgDatabaseProbe {
    /// A closed pool or a failed ping on a checked-out connection answers
    /// `false`. Failing to check a connection out at all is returned as an
    /// error.
    #[instrument(skip_all)]
    async fn is_active(&self) -> Result<bool, sqlx::Error> {
        if self.pool.is_closed() {
            debug!("Connection pool is closed");
            return Ok(false);
        }

        let mut conn = self.pool.acquire().await?;

        match conn.ping().await {
            Ok(()) => Ok(true),
            Err(e) => {
                debug!(error = %e, "Ping on pooled connection failed");
                Ok(false)
            }
        }
    }
}
