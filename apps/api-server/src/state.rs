//! Application state - shared across all handlers.

use std::sync::Arc;

use tutorhub_core::ports::{ProfileRepository, ReviewRepository, SessionStore};
use tutorhub_infra::{InMemorySessionStore, MySqlProfileRepository, MySqlReviewRepository, connect};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub profiles: Arc<dyn ProfileRepository>,
    pub reviews: Arc<dyn ReviewRepository>,
    pub sessions: Arc<dyn SessionStore>,
}

#[derive(Debug, thiserror::Error)]
pub enum StateInitError {
    #[error("DATABASE_URL is not set")]
    MissingDatabaseUrl,

    #[error("Database connection failed: {0}")]
    Database(String),
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Result<Self, StateInitError> {
        let db_config = config
            .database
            .as_ref()
            .ok_or(StateInitError::MissingDatabaseUrl)?;

        let db = connect(db_config)
            .await
            .map_err(|e| StateInitError::Database(e.to_string()))?;

        let profiles: Arc<dyn ProfileRepository> =
            Arc::new(MySqlProfileRepository::new(db.clone()));
        let reviews: Arc<dyn ReviewRepository> = Arc::new(MySqlReviewRepository::new(db));
        let sessions = Self::session_store(config).await;

        tracing::info!("Application state initialized");

        Ok(Self {
            profiles,
            reviews,
            sessions,
        })
    }

    #[cfg(feature = "redis")]
    async fn session_store(config: &AppConfig) -> Arc<dyn SessionStore> {
        use tutorhub_infra::{RedisSessionConfig, RedisSessionStore};

        if let Some(url) = &config.redis_url {
            let redis_config = RedisSessionConfig {
                url: url.clone(),
                ..RedisSessionConfig::default()
            };
            match RedisSessionStore::new(redis_config).await {
                Ok(store) => return Arc::new(store),
                Err(e) => {
                    tracing::warn!("Redis unavailable ({e}). Falling back to in-memory sessions.")
                }
            }
        } else {
            tracing::info!("REDIS_URL not set. Using in-memory sessions.");
        }

        Arc::new(InMemorySessionStore::new())
    }

    #[cfg(not(feature = "redis"))]
    async fn session_store(_config: &AppConfig) -> Arc<dyn SessionStore> {
        Arc::new(InMemorySessionStore::new())
    }
}
