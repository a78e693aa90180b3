//! User flag REST API handlers
//!
//! The single-record read is public; the update and bulk-read routes sit
//! behind the shared-secret extractor.

use crate::{
    ApiError, ApiResult, AppState, RequireApiKey, UpdateUserRequest, UpdateUserResponse,
    UserListResponse, UserStateResponse,
};

use ft_core::FlagPatch;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
};
use error_location::ErrorLocation;

// =============================================================================
// Handlers
// =============================================================================

/// GET /user/{id}
///
/// Current flag record for one identity
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserStateResponse>> {
    state.metrics.request_handled("get_user");

    let record = state
        .store
        .get(&id)
        .await
        .ok_or_else(|| ApiError::NotFound {
            message: format!("User {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(UserStateResponse::new(id, record)))
}

/// POST /user/{id}/update
///
/// Merge a partial set of flags into the identity's record, creating it on
/// first update. Fields absent from the body keep their stored value.
pub async fn update_user(
    _auth: RequireApiKey,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> ApiResult<Json<UpdateUserResponse>> {
    state.metrics.request_handled("update_user");

    let patch = FlagPatch::from(req);
    let outcome = state.store.update(&id, &patch).await;

    // The store already logged a failed snapshot write; the merged record
    // is still returned so the caller sees the applied state.
    if !outcome.is_durable() {
        state.metrics.persist_failure();
    }

    Ok(Json(UpdateUserResponse {
        ok: true,
        user_id: id,
        updated: outcome.record.into(),
    }))
}

/// GET /_list-all-users
///
/// Full identity → record mapping, taken as one consistent snapshot
pub async fn list_users(
    _auth: RequireApiKey,
    State(state): State<AppState>,
) -> ApiResult<Json<UserListResponse>> {
    state.metrics.request_handled("list_users");

    let users = state.store.list().await;

    Ok(Json(UserListResponse::from(users)))
}
