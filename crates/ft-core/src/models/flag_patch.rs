use serde::Deserialize;

/// Partial update for a [`UserRecord`](crate::UserRecord).
///
/// Only the fields present in the incoming JSON overwrite stored state.
/// Keys outside the five tracked flags are dropped during deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FlagPatch {
    pub is_using_script: Option<bool>,
    pub premium: Option<bool>,
    pub owner: Option<bool>,
    pub admin: Option<bool>,
    pub banned: Option<bool>,
}

impl FlagPatch {
    /// True when the patch touches no flag at all.
    pub fn is_empty(&self) -> bool {
        self.is_using_script.is_none()
            && self.premium.is_none()
            && self.owner.is_none()
            && self.admin.is_none()
            && self.banned.is_none()
    }
}
