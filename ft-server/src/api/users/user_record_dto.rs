use ft_core::UserRecord;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Flag record DTO for JSON serialization, wire key spelling included
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserRecordDto {
    pub is_using_script: bool,
    pub premium: bool,
    pub owner: bool,
    pub admin: bool,
    pub banned: bool,
    /// `null` until the record is first written through the update path
    #[serde(rename = "lastUpdated")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl From<UserRecord> for UserRecordDto {
    fn from(r: UserRecord) -> Self {
        Self {
            is_using_script: r.is_using_script,
            premium: r.premium,
            owner: r.owner,
            admin: r.admin,
            banned: r.banned,
            last_updated: r.last_updated,
        }
    }
}
