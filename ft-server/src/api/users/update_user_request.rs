use ft_core::FlagPatch;

use serde::Deserialize;

/// POST /user/{id}/update request body.
///
/// Every field is optional; keys outside the five tracked flags are
/// ignored rather than rejected.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub is_using_script: Option<bool>,

    #[serde(default)]
    pub premium: Option<bool>,

    #[serde(default)]
    pub owner: Option<bool>,

    #[serde(default)]
    pub admin: Option<bool>,

    #[serde(default)]
    pub banned: Option<bool>,
}

impl From<UpdateUserRequest> for FlagPatch {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            is_using_script: req.is_using_script,
            premium: req.premium,
            owner: req.owner,
            admin: req.admin,
            banned: req.banned,
        }
    }
}
