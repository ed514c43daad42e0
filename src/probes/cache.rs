use async_trait::async_trait;
use redis::{Client, Value};
use tracing::{debug, instrument};

use super::{ACK_TOKEN, CacheProbe, CacheStatus};

/// Pings Redis with a client built from the configured URL.
///
/// A fresh client and connection are opened on every call, so a URL that
/// becomes reachable later is picked up without a restart.
#[derive(Debug, Clone)]
pub struct RedisCacheProbe {
    url: Option<String>,
}

impl RedisCacheProbe {
    pub fn new(url: Option<String>) -> Self {
        Self { url }
    }
}

#[async_trait]
impl CacheProbe for RedisCacheProbe {
    #[instrument(skip_all)]
    async fn ping(&self) -> CacheStatus {
        let Some(url) = self.url.as_deref() else {
            return CacheStatus::Misconfigured("REDIS_URL is not set".to_string());
        };

        let client = match Client::open(url) {
            Ok(client) => client,
            Err(e) => return CacheStatus::Misconfigured(e.to_string()),
        };

        let mut conn = match client.get_multiplexed_async_connection().await {
            Ok(conn) => conn,
            Err(e) => {
                debug!(error = %e, "Could not connect to Redis");
                return CacheStatus::Unreachable(e.to_string());
            }
        };

        match redis::cmd("PING").query_async::<Value>(&mut conn).await {
            Ok(reply) => classify_reply(&reply),
            Err(e) => CacheStatus::Unreachable(e.to_string()),
        }
    }
}

/// Compares a `PING` reply against [`ACK_TOKEN`].
pub fn classify_reply(reply: &Value) -> CacheStatus {
    let matches = match reply {
        Value::SimpleString(s) => s == ACK_TOKEN,
        Value::BulkString(bytes) => bytes.as_slice() == ACK_TOKEN.as_bytes(),
        _ => false,
    };

    if matches {
        CacheStatus::Ok
    } else {
        CacheStatus::ProtocolError(format!("{reply:?}"))
    }
}
