use crate::UserRecordDto;

use ft_core::UserRecord;

use serde::Serialize;

/// GET /user/{id} response: the flag record with its identity inlined
#[derive(Debug, Serialize)]
pub struct UserStateResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(flatten)]
    pub record: UserRecordDto,
}

impl UserStateResponse {
    pub fn new(user_id: String, record: UserRecord) -> Self {
        Self {
            user_id,
            record: record.into(),
        }
    }
}
