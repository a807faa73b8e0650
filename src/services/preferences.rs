use serde_json::Value;

use crate::{
    error::AppResult,
    models::{PreferencesPatch, PreferencesUpdate, SessionId, UserPreferences},
    services::{AuthService, UserStates},
};

/// Session-gated display preferences
#[derive(Clone)]
pub struct PreferencesService {
    auth: AuthService,
    users: UserStates,
}

impl PreferencesService {
    pub fn new(auth: AuthService, users: UserStates) -> Self {
        Self { auth, users }
    }

    pub async fn get_preferences(&self, session: &SessionId) -> AppResult<UserPreferences> {
        let session = self.auth.authenticate(session).await?;
        let entry = self.users.entry(session.user_id).await;
        let state = entry.lock().await;

        Ok(state.preferences)
    }

    /// Applies a partial update
    ///
    /// The patch is validated in full before the user's state is locked, so an
    /// invalid field leaves every preference untouched.
    pub async fn update_preferences(
        &self,
        session: &SessionId,
        raw: &Value,
    ) -> AppResult<PreferencesUpdate> {
        let session = self.auth.authenticate(session).await?;
        let patch = PreferencesPatch::from_json(raw)?;

        let entry = self.users.entry(session.user_id).await;
        let mut state = entry.lock().await;
        state.preferences.apply(&patch);

        tracing::info!(
            user_id = %session.user_id,
            theme_dark = state.preferences.theme_dark,
            text_size = %state.preferences.text_size,
            voice_command = state.preferences.voice_command,
            "Preferences updated"
        );

        Ok(PreferencesUpdate::ok(state.preferences))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MockCredentialStore;
    use crate::error::AppError;
    use crate::models::{TextSize, UserId};
    use crate::services::{InMemorySessionStore, SessionStore};
    use serde_json::json;
    use std::sync::Arc;

    async fn fixture() -> (PreferencesService, SessionId, UserStates) {
        let sessions = Arc::new(InMemorySessionStore::new());
        let session = sessions.create(UserId(1), "alice").await;
        let auth = AuthService::new(Arc::new(MockCredentialStore::new()), sessions);
        let users = UserStates::new();
        (PreferencesService::new(auth, users.clone()), session.id, users)
    }

    #[tokio::test]
    async fn test_defaults_before_any_update() {
        let (service, session, _) = fixture().await;
        let prefs = service.get_preferences(&session).await.unwrap();
        assert_eq!(prefs, UserPreferences::default());
    }

    #[tokio::test]
    async fn test_partial_update() {
        let (service, session, _) = fixture().await;
        service
            .update_preferences(&session, &json!({ "text_size": "large", "voice_command": true }))
            .await
            .unwrap();

        let update = service
            .update_preferences(&session, &json!({ "theme_dark": true }))
            .await
            .unwrap();

        assert!(update.preferences.theme_dark);
        assert_eq!(update.preferences.text_size, TextSize::Large);
        assert!(update.preferences.voice_command);
    }

    #[tokio::test]
    async fn test_invalid_update_changes_nothing() {
        let (service, session, _) = fixture().await;
        let err = service
            .update_preferences(&session, &json!({ "theme_dark": true, "text_size": "huge" }))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_field");

        let prefs = service.get_preferences(&session).await.unwrap();
        assert_eq!(prefs, UserPreferences::default());
    }

    #[tokio::test]
    async fn test_unknown_session_rejected_before_validation() {
        let (service, _, users) = fixture().await;
        let result = service
            .update_preferences(&SessionId::new(), &json!({ "text_size": "huge" }))
            .await;
        assert!(matches!(result, Err(AppError::Unauthenticated)));
        assert!(users.is_empty().await);
    }
}
