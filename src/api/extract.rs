use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::{error::AppError, models::SessionId};

/// `Json` whose rejections answer with the `invalid_input` error body
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// `Path` whose rejections answer with the `invalid_input` error body
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// Reads the session token from `Authorization: Bearer <token>`
///
/// Only checks the shape of the token; whether it maps to a live session is
/// decided by the services.
#[async_trait]
impl<S> FromRequestParts<S> for SessionId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AppError::Unauthenticated)?;

        let (scheme, token) = header
            .split_once(' ')
            .ok_or(AppError::Unauthenticated)?;
        if !scheme.eq_ignore_ascii_case("bearer") {
            return Err(AppError::Unauthenticated);
        }

        token.trim().parse().map_err(|_| AppError::Unauthenticated)
    }
}
