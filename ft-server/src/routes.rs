use crate::api::users::users::{get_user, list_users, update_user};
use crate::{AppState, health, rate_limit};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Request bodies larger than this are rejected before parsing.
pub const MAX_BODY_BYTES: usize = 20 * 1024;

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Liveness + health endpoints
        .route("/", get(health::liveness))
        .route("/health", get(health::health))
        // Flag record endpoints
        .route("/user/{id}", get(get_user))
        .route("/user/{id}/update", post(update_user))
        .route("/_list-all-users", get(list_users))
        // Per-address rate limiting ahead of every route
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit::enforce,
        ))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        // CORS middleware (allow all origins)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
