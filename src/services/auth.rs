use std::sync::Arc;

use crate::{
    db::CredentialStore,
    error::{AppError, AppResult},
    models::{Session, SessionId, UserId},
    services::{
        password::{hash_password, verify_password, UNKNOWN_USER_HASH},
        SessionStore,
    },
};

/// Account and session handling
///
/// Owns the two collaborators every protected operation depends on: the
/// credential store for signup/login and the session store for resolving
/// tokens. Passwords and hashes are never logged.
#[derive(Clone)]
pub struct AuthService {
    credentials: Arc<dyn CredentialStore>,
    sessions: Arc<dyn SessionStore>,
}

impl AuthService {
    pub fn new(credentials: Arc<dyn CredentialStore>, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            credentials,
            sessions,
        }
    }

    /// Registers a new user
    pub async fn signup(
        &self,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> AppResult<UserId> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() || confirm_password.is_empty() {
            return Err(AppError::InvalidInput("All fields are required".to_string()));
        }
        if password != confirm_password {
            return Err(AppError::InvalidInput("Passwords do not match".to_string()));
        }

        let password = password.to_string();
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| AppError::Internal(e.to_string()))??;

        let user_id = self
            .credentials
            .insert_if_absent(username, &password_hash)
            .await?
            .ok_or_else(|| AppError::Conflict(format!("Username `{}` already exists", username)))?;

        tracing::info!(user_id = %user_id, username, "User signed up");
        Ok(user_id)
    }

    /// Verifies credentials and opens a session
    pub async fn login(&self, username: &str, password: &str) -> AppResult<Session> {
        let username = username.trim();
        let user = self.credentials.find_by_username(username).await?;

        // Unknown users still pay for a verification
        let password = password.to_string();
        let stored_hash = user
            .as_ref()
            .map_or_else(|| UNKNOWN_USER_HASH.to_string(), |u| u.password_hash.clone());
        let verified =
            tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
                .await
                .map_err(|e| AppError::Internal(e.to_string()))??;

        let user = match user {
            Some(user) if verified => user,
            Some(user) => {
                tracing::info!(user_id = %user.id, "Login rejected");
                return Err(AppError::InvalidCredentials);
            }
            None => {
                tracing::info!(username, "Login attempt for unknown user");
                return Err(AppError::InvalidCredentials);
            }
        };

        let session = self.sessions.create(user.id, &user.username).await;
        tracing::info!(user_id = %user.id, "User logged in");
        Ok(session)
    }

    pub async fn logout(&self, session_id: &SessionId) -> AppResult<()> {
        if !self.sessions.revoke(session_id).await {
            return Err(AppError::Unauthenticated);
        }
        tracing::info!("Session revoked");
        Ok(())
    }

    /// Resolves a token to its live session
    ///
    /// Also records the user on the current request span.
    pub async fn authenticate(&self, session_id: &SessionId) -> AppResult<Session> {
        let session = self
            .sessions
            .resolve(session_id)
            .await
            .ok_or(AppError::Unauthenticated)?;

        tracing::Span::current().record("user_id", tracing::field::display(session.user_id));
        Ok(session)
    }
}
