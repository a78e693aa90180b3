//! Per-address rate limiting applied ahead of every route.

use crate::{ApiError, AppState};

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use log::debug;

/// Reject requests from addresses that exceeded the configured ceiling.
///
/// A request without a recorded peer address (only seen under test
/// harnesses that bypass `into_make_service_with_connect_info`) passes
/// through.
pub async fn enforce(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip());

    let Some(addr) = addr else {
        debug!("No peer address on request, skipping rate limit");
        return next.run(request).await;
    };

    match state.limiter.check(addr) {
        Ok(()) => next.run(request).await,
        Err(e) => {
            state.metrics.rate_limited();
            ApiError::from(e).into_response()
        }
    }
}
