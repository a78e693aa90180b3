use crate::UserRecordDto;

use ft_core::UserRecord;

use std::collections::HashMap;

use serde::Serialize;

/// GET /_list-all-users response: the full identity → record mapping
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: HashMap<String, UserRecordDto>,
}

impl From<HashMap<String, UserRecord>> for UserListResponse {
    fn from(users: HashMap<String, UserRecord>) -> Self {
        Self {
            users: users
                .into_iter()
                .map(|(id, record)| (id, record.into()))
                .collect(),
        }
    }
}
