//! Redis session store - process-external sessions that survive restarts.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};

use tutorhub_core::error::SessionError;
use tutorhub_core::ports::SessionStore;

/// Redis connection configuration.
#[derive(Debug, Clone)]
pub struct RedisSessionConfig {
    /// Redis URL (e.g., redis://localhost:6379)
    pub url: String,
    /// Connection timeout
    pub connect_timeout: Duration,
}

impl Default for RedisSessionConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

impl RedisSessionConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            url: std::env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
            connect_timeout: Duration::from_secs(
                std::env::var("REDIS_CONNECT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
        }
    }
}

/// Redis-backed session store.
///
/// Uses connection manager for automatic reconnection.
pub struct RedisSessionStore {
    conn: ConnectionManager,
}

impl RedisSessionStore {
    pub async fn new(config: RedisSessionConfig) -> Result<Self, SessionError> {
        let client = Client::open(config.url.as_str())
            .map_err(|e| SessionError::Connection(e.to_string()))?;

        // Use timeout to prevent hanging if Redis is unreachable
        let conn_manager_fut = ConnectionManager::new(client);
        let conn = tokio::time::timeout(config.connect_timeout, conn_manager_fut)
            .await
            .map_err(|_| SessionError::Connection("Connection timed out".to_string()))?
            .map_err(|e| SessionError::Connection(e.to_string()))?;

        tracing::info!(url = %config.url, "Connected to Redis session store");

        Ok(Self { conn })
    }

    /// Create from environment configuration.
    pub async fn from_env() -> Result<Self, SessionError> {
        Self::new(RedisSessionConfig::from_env()).await
    }

    fn key(session_id: &str) -> String {
        format!("session:{session_id}")
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn put(&self, session_id: &str, profile_id: i64) -> Result<(), SessionError> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(Self::key(session_id), profile_id)
            .await
            .map_err(|e| SessionError::Operation(e.to_string()))?;
        Ok(())
    }

    async fn get(&self, session_id: &str) -> Option<i64> {
        let mut conn = self.conn.clone();
        match conn.get::<_, Option<i64>>(Self::key(session_id)).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(session_id = %session_id, error = %e, "Redis GET failed");
                None
            }
        }
    }

    async fn remove(&self, session_id: &str) -> Result<(), SessionError> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(Self::key(session_id))
            .await
            .map_err(|e| SessionError::Operation(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn get_test_store() -> Option<RedisSessionStore> {
        let config = RedisSessionConfig {
            url: std::env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6389".to_string()),
            connect_timeout: Duration::from_secs(1),
        };

        RedisSessionStore::new(config).await.ok()
    }

    #[tokio::test]
    async fn redis_session_round_trip() {
        let store = match get_test_store().await {
            Some(s) => s,
            None => {
                tracing::warn!("Redis not available, skipping test");
                return;
            }
        };

        store.put("test_session", 42).await.unwrap();
        assert_eq!(store.get("test_session").await, Some(42));

        store.remove("test_session").await.unwrap();
        assert_eq!(store.get("test_session").await, None);
    }
}
