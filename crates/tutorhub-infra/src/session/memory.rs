//! In-memory session store - used when Redis is not configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use tutorhub_core::error::SessionError;
use tutorhub_core::ports::SessionStore;

/// Session map behind an async RwLock.
///
/// Sessions are lost on process restart; suitable for development and
/// single-node deployments.
pub struct InMemorySessionStore {
    store: RwLock<HashMap<String, i64>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn put(&self, session_id: &str, profile_id: i64) -> Result<(), SessionError> {
        let mut store = self.store.write().await;
        store.insert(session_id.to_string(), profile_id);
        Ok(())
    }

    async fn get(&self, session_id: &str) -> Option<i64> {
        let store = self.store.read().await;
        store.get(session_id).copied()
    }

    async fn remove(&self, session_id: &str) -> Result<(), SessionError> {
        let mut store = self.store.write().await;
        store.remove(session_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_and_get() {
        let store = InMemorySessionStore::new();
        store.put("sid-1", 42).await.unwrap();
        assert_eq!(store.get("sid-1").await, Some(42));
        assert_eq!(store.get("sid-2").await, None);
    }

    #[tokio::test]
    async fn remove_drops_the_session() {
        let store = InMemorySessionStore::new();
        store.put("sid-1", 42).await.unwrap();
        store.remove("sid-1").await.unwrap();
        assert_eq!(store.get("sid-1").await, None);
    }
}
