pub mod update_user_request;
pub mod update_user_response;
pub mod user_list_response;
pub mod user_record_dto;
pub mod user_state_response;
pub mod users;
