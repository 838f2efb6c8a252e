use async_trait::async_trait;

use crate::error::SessionError;

/// Session store - abstraction over the process-external key-value store
/// holding signed-in profile ids. Written once at sign-in, read by later
/// requests; the entity layer never touches it.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Bind a session id to a profile id.
    async fn put(&self, session_id: &str, profile_id: i64) -> Result<(), SessionError>;

    /// Resolve a session id, if the session exists.
    async fn get(&self, session_id: &str) -> Option<i64>;

    /// Drop a session.
    async fn remove(&self, session_id: &str) -> Result<(), SessionError>;
}
