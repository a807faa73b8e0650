use std::sync::Arc;

use crate::{
    db::CredentialStore,
    models::Catalog,
    services::{AuthService, PreferencesService, SessionStore, UserStates, WatchlistService},
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    pub watchlist: WatchlistService,
    pub preferences: PreferencesService,
}

impl AppState {
    /// Wires the services around injected credential and session stores
    pub fn new(
        catalog: Catalog,
        credentials: Arc<dyn CredentialStore>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        let auth = AuthService::new(credentials, sessions);
        let users = UserStates::new();

        Self {
            watchlist: WatchlistService::new(Arc::new(catalog), auth.clone(), users.clone()),
            preferences: PreferencesService::new(auth.clone(), users),
            auth,
        }
    }
}
