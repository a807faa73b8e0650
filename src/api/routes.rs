use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Accounts
        .route("/auth/signup", post(handlers::signup))
        .route("/auth/login", post(handlers::login))
        .route("/auth/logout", post(handlers::logout))
        // Swipe stack
        .route("/recommendations", get(handlers::get_recommendations))
        .route("/recommendations/current", get(handlers::current_recommendation))
        .route("/recommendations/reset", post(handlers::reset_recommendations))
        .route("/recommendations/:id/accept", post(handlers::accept_show))
        .route("/recommendations/:id/reject", post(handlers::reject_show))
        // Watchlist
        .route("/watchlist", get(handlers::get_watchlist))
        .route("/watchlist/:id", delete(handlers::remove_show))
        // Preferences
        .route(
            "/preferences",
            get(handlers::get_preferences).patch(handlers::update_preferences),
        )
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
