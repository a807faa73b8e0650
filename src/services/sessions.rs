use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::models::{Session, SessionId, UserId};

/// Maps session tokens to authenticated users
///
/// Sessions have no server-side expiry; they live until revoked or until the
/// store is dropped.
#[async_trait::async_trait]
pub trait SessionStore: Send + Sync {
    async fn create(&self, user_id: UserId, username: &str) -> Session;

    async fn resolve(&self, id: &SessionId) -> Option<Session>;

    /// Returns whether a live session was revoked
    async fn revoke(&self, id: &SessionId) -> bool;
}

/// Process-local session store
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionId, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, user_id: UserId, username: &str) -> Session {
        let session = Session::new(user_id, username.to_string());
        self.sessions
            .write()
            .await
            .insert(session.id, session.clone());
        session
    }

    async fn resolve(&self, id: &SessionId) -> Option<Session> {
        self.sessions.read().await.get(id).cloned()
    }

    async fn revoke(&self, id: &SessionId) -> bool {
        self.sessions.write().await.remove(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_resolve_revoke() {
        tokio_test::block_on(async {
            let store = InMemorySessionStore::new();
            let session = store.create(UserId(7), "alice").await;

            let resolved = store.resolve(&session.id).await.unwrap();
            assert_eq!(resolved.user_id, UserId(7));
            assert_eq!(resolved.username, "alice");

            assert!(store.revoke(&session.id).await);
            assert!(store.resolve(&session.id).await.is_none());
            assert!(!store.revoke(&session.id).await);
        });
    }

    #[test]
    fn test_unknown_token() {
        let store = InMemorySessionStore::new();
        let resolved = tokio_test::block_on(store.resolve(&SessionId::new()));
        assert!(resolved.is_none());
    }
}
