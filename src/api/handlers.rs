use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppResult;
use crate::models::{
    AcceptOutcome, CursorView, PreferencesUpdate, RejectOutcome, RemoveOutcome, RemoveStatus,
    SessionId, ShowId, ShowItem, UserId, UserPreferences,
};

use super::{ApiJson, ApiPath, AppState};

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub id: UserId,
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: SessionId,
    pub username: String,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Register a new account
pub async fn signup(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SignupRequest>,
) -> AppResult<(StatusCode, Json<SignupResponse>)> {
    let id = state
        .auth
        .signup(&request.username, &request.password, &request.confirm_password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            id,
            username: request.username.trim().to_string(),
        }),
    ))
}

/// Exchange credentials for a session token
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let session = state.auth.login(&request.username, &request.password).await?;

    Ok(Json(LoginResponse {
        token: session.id,
        username: session.username,
    }))
}

pub async fn logout(State(state): State<AppState>, session: SessionId) -> AppResult<StatusCode> {
    state.auth.logout(&session).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Full catalog in swipe order
pub async fn get_recommendations(
    State(state): State<AppState>,
    session: SessionId,
) -> AppResult<Json<Vec<ShowItem>>> {
    state.auth.authenticate(&session).await?;
    Ok(Json(state.watchlist.catalog().items().to_vec()))
}

/// Card currently on top of the caller's swipe stack
pub async fn current_recommendation(
    State(state): State<AppState>,
    session: SessionId,
) -> AppResult<Json<CursorView>> {
    let view = state.watchlist.current_show(&session).await?;
    Ok(Json(view))
}

pub async fn reset_recommendations(
    State(state): State<AppState>,
    session: SessionId,
) -> AppResult<Json<CursorView>> {
    let view = state.watchlist.reset_cursor(&session).await?;
    Ok(Json(view))
}

pub async fn accept_show(
    State(state): State<AppState>,
    session: SessionId,
    ApiPath(show_id): ApiPath<i64>,
) -> AppResult<Json<AcceptOutcome>> {
    let outcome = state.watchlist.accept_show(&session, ShowId(show_id)).await?;
    Ok(Json(outcome))
}

pub async fn reject_show(
    State(state): State<AppState>,
    session: SessionId,
    ApiPath(show_id): ApiPath<i64>,
) -> AppResult<Json<RejectOutcome>> {
    let outcome = state.watchlist.reject_show(&session, ShowId(show_id)).await?;
    Ok(Json(outcome))
}

pub async fn get_watchlist(
    State(state): State<AppState>,
    session: SessionId,
) -> AppResult<Json<Vec<ShowItem>>> {
    let items = state.watchlist.list_watchlist(&session).await?;
    Ok(Json(items))
}

/// Remove a show; a show that is not listed answers 404 with the outcome body
pub async fn remove_show(
    State(state): State<AppState>,
    session: SessionId,
    ApiPath(show_id): ApiPath<i64>,
) -> AppResult<(StatusCode, Json<RemoveOutcome>)> {
    let outcome = state.watchlist.remove_show(&session, ShowId(show_id)).await?;
    let status = match outcome.status {
        RemoveStatus::Ok => StatusCode::OK,
        RemoveStatus::NotFound => StatusCode::NOT_FOUND,
    };
    Ok((status, Json(outcome)))
}

pub async fn get_preferences(
    State(state): State<AppState>,
    session: SessionId,
) -> AppResult<Json<UserPreferences>> {
    let preferences = state.preferences.get_preferences(&session).await?;
    Ok(Json(preferences))
}

/// Partial preferences update
///
/// Takes raw JSON so that bad values surface as `invalid_field`; only a
/// body that is not JSON at all is `invalid_input`.
pub async fn update_preferences(
    State(state): State<AppState>,
    session: SessionId,
    ApiJson(patch): ApiJson<Value>,
) -> AppResult<Json<PreferencesUpdate>> {
    let update = state.preferences.update_preferences(&session, &patch).await?;
    Ok(Json(update))
}
