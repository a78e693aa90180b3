//! Axum extractors for shared-secret authentication

use crate::{ApiError, AppState};

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Header carrying the shared secret on protected routes.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Requires a valid `x-api-key` header on the request.
///
/// Rejection happens before the handler body runs, so the store is never
/// touched on a denied request.
pub struct RequireApiKey;

impl FromRequestParts<AppState> for RequireApiKey {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let presented = parts
                .headers
                .get(API_KEY_HEADER)
                .and_then(|value| value.to_str().ok());

            state.guard.authorize(presented).map_err(|e| {
                state.metrics.auth_denied();
                log::debug!("Denied request: {}", e);
                ApiError::from(e)
            })?;

            Ok(RequireApiKey)
        }
    }
}
