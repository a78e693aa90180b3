use crate::UserRecordDto;

use serde::Serialize;

/// POST /user/{id}/update response: the resulting full record
#[derive(Debug, Serialize)]
pub struct UpdateUserResponse {
    pub ok: bool,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub updated: UserRecordDto,
}
