use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{
        AcceptOutcome, Catalog, CursorView, RejectOutcome, RemoveOutcome, SessionId, ShowId,
        ShowItem,
    },
    services::{AuthService, UserStates},
};

/// Session-gated watchlist and swipe-stack operations
///
/// Every operation authenticates first; an unknown session fails with
/// `Unauthenticated` before any user state is touched. Mutations look up
/// before they write, so no-op and failure paths leave the watchlist as it was.
#[derive(Clone)]
pub struct WatchlistService {
    catalog: Arc<Catalog>,
    auth: AuthService,
    users: UserStates,
}

impl WatchlistService {
    pub fn new(catalog: Arc<Catalog>, auth: AuthService, users: UserStates) -> Self {
        Self {
            catalog,
            auth,
            users,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Adds a catalog show to the user's watchlist
    ///
    /// Unknown and already-listed ids are the same safe no-op. The swipe
    /// cursor moves past `show_id` whatever the outcome.
    pub async fn accept_show(
        &self,
        session: &SessionId,
        show_id: ShowId,
    ) -> AppResult<AcceptOutcome> {
        let session = self.auth.authenticate(session).await?;
        let entry = self.users.entry(session.user_id).await;
        let mut state = entry.lock().await;

        state.cursor.advance_past(show_id, &self.catalog);

        let Some(show) = self.catalog.get(show_id) else {
            tracing::debug!(show_id = %show_id, "Accept for show missing from catalog");
            return Ok(AcceptOutcome::skipped());
        };

        if !state.watchlist.insert(show.clone()) {
            tracing::debug!(show_id = %show_id, "Show already in watchlist");
            return Ok(AcceptOutcome::skipped());
        }

        tracing::info!(
            user_id = %session.user_id,
            show_id = %show_id,
            watchlist_len = state.watchlist.len(),
            "Show added to watchlist"
        );
        Ok(AcceptOutcome::added(&show.title))
    }

    /// Skips a show; only the swipe cursor moves
    pub async fn reject_show(
        &self,
        session: &SessionId,
        show_id: ShowId,
    ) -> AppResult<RejectOutcome> {
        let session = self.auth.authenticate(session).await?;
        let entry = self.users.entry(session.user_id).await;
        let mut state = entry.lock().await;

        state.cursor.advance_past(show_id, &self.catalog);
        tracing::debug!(show_id = %show_id, "Show rejected");

        Ok(RejectOutcome::ok())
    }

    pub async fn remove_show(
        &self,
        session: &SessionId,
        show_id: ShowId,
    ) -> AppResult<RemoveOutcome> {
        let session = self.auth.authenticate(session).await?;
        let entry = self.users.entry(session.user_id).await;
        let mut state = entry.lock().await;

        match state.watchlist.remove(show_id) {
            Some(show) => {
                tracing::info!(
                    user_id = %session.user_id,
                    show_id = %show_id,
                    "Show removed from watchlist"
                );
                Ok(RemoveOutcome::removed(&show.title))
            }
            None => Ok(RemoveOutcome::not_found()),
        }
    }

    /// Watchlist in the order shows were accepted
    pub async fn list_watchlist(&self, session: &SessionId) -> AppResult<Vec<ShowItem>> {
        let session = self.auth.authenticate(session).await?;
        let entry = self.users.entry(session.user_id).await;
        let state = entry.lock().await;

        Ok(state.watchlist.items().to_vec())
    }

    pub async fn current_show(&self, session: &SessionId) -> AppResult<CursorView> {
        let session = self.auth.authenticate(session).await?;
        let entry = self.users.entry(session.user_id).await;
        let state = entry.lock().await;

        Ok(state.cursor.view(&self.catalog))
    }

    /// Restarts the swipe stack from the first catalog show
    pub async fn reset_cursor(&self, session: &SessionId) -> AppResult<CursorView> {
        let session = self.auth.authenticate(session).await?;
        let entry = self.users.entry(session.user_id).await;
        let mut state = entry.lock().await;

        state.cursor.reset();
        Ok(state.cursor.view(&self.catalog))
    }
}
