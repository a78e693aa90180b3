pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod rate_limit;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::api_key::{API_KEY_HEADER, RequireApiKey},
    users::{
        update_user_request::UpdateUserRequest,
        update_user_response::UpdateUserResponse,
        user_list_response::UserListResponse,
        user_record_dto::UserRecordDto,
        user_state_response::UserStateResponse,
        users::{get_user, list_users, update_user},
    },
};

pub use crate::config::Config;
pub use crate::metrics::Metrics;
pub use crate::routes::build_router;
pub use crate::state::AppState;
