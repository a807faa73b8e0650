use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::models::{RecommendationCursor, UserId, UserPreferences, Watchlist};

/// Everything one user can mutate, guarded together by one lock
#[derive(Debug, Default)]
pub struct UserState {
    pub watchlist: Watchlist,
    pub preferences: UserPreferences,
    pub cursor: RecommendationCursor,
}

/// Registry of per-user state
///
/// The outer lock is held only long enough to find or create a user's entry;
/// all reads and writes of that entry go through its own mutex, so different
/// users never wait on each other.
#[derive(Clone, Default)]
pub struct UserStates {
    inner: Arc<RwLock<HashMap<UserId, Arc<Mutex<UserState>>>>>,
}

impl UserStates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state handle for a user, creating it on first use
    pub async fn entry(&self, user_id: UserId) -> Arc<Mutex<UserState>> {
        {
            let inner = self.inner.read().await;
            if let Some(state) = inner.get(&user_id) {
                return Arc::clone(state);
            }
        }

        let mut inner = self.inner.write().await;
        Arc::clone(inner.entry(user_id).or_default())
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
