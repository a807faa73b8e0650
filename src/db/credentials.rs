use chrono::Utc;
use sqlx::SqlitePool;

use crate::{
    error::AppResult,
    models::{UserId, UserRecord},
};

/// Persistence for username → password-hash mappings
///
/// Implementations must make `insert_if_absent` atomic: two concurrent
/// signups for the same username produce exactly one user.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CredentialStore: Send + Sync {
    /// Stores a new user, returning `None` when the username is taken
    async fn insert_if_absent(
        &self,
        username: &str,
        password_hash: &str,
    ) -> AppResult<Option<UserId>>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<UserRecord>>;
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password_hash: String,
}

impl From<UserRow> for UserRecord {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId(row.id),
            username: row.username,
            password_hash: row.password_hash,
        }
    }
}

/// Credential store backed by the `users` table
#[derive(Clone)]
pub struct SqliteCredentialStore {
    pool: SqlitePool,
}

impl SqliteCredentialStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl CredentialStore for SqliteCredentialStore {
    async fn insert_if_absent(
        &self,
        username: &str,
        password_hash: &str,
    ) -> AppResult<Option<UserId>> {
        let result = sqlx::query(
            "INSERT INTO users (username, password_hash, created_at) VALUES (?, ?, ?) \
             ON CONFLICT(username) DO NOTHING",
        )
        .bind(username)
        .bind(password_hash)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(UserId(result.last_insert_rowid())))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<UserRecord>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, password_hash FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRecord::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    async fn store() -> SqliteCredentialStore {
        let pool = create_pool("sqlite::memory:", 1).await.unwrap();
        SqliteCredentialStore::new(pool)
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = store().await;
        let id = store.insert_if_absent("alice", "hash-a").await.unwrap();
        assert!(id.is_some());

        let record = store.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(Some(record.id), id);
        assert_eq!(record.password_hash, "hash-a");
    }

    #[tokio::test]
    async fn test_duplicate_username_not_inserted() {
        let store = store().await;
        store.insert_if_absent("alice", "hash-a").await.unwrap();

        let second = store.insert_if_absent("alice", "hash-b").await.unwrap();
        assert!(second.is_none());

        let record = store.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(record.password_hash, "hash-a");
    }

    #[tokio::test]
    async fn test_missing_user() {
        let store = store().await;
        assert!(store.find_by_username("nobody").await.unwrap().is_none());
    }
}
