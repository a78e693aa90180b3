//! Tracked flag state for one user identity.

use crate::FlagPatch;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The full flag record stored per identity.
///
/// All five flags are always present once a record exists. Flags absent
/// from a stored document deserialize as `false`, so snapshots written
/// before a flag existed stay readable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserRecord {
    #[serde(default)]
    pub is_using_script: bool,
    #[serde(default)]
    pub premium: bool,
    #[serde(default)]
    pub owner: bool,
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub banned: bool,
    /// Stamped on every successful merge; `None` until the record is first
    /// written through the update path.
    #[serde(rename = "lastUpdated", default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl UserRecord {
    /// Merge `patch` into this record: fields present in the patch are
    /// overwritten, everything else keeps its stored value. The update
    /// timestamp is always advanced, even for an empty patch.
    pub fn apply(&mut self, patch: &FlagPatch, at: DateTime<Utc>) {
        if let Some(v) = patch.is_using_script {
            self.is_using_script = v;
        }
        if let Some(v) = patch.premium {
            self.premium = v;
        }
        if let Some(v) = patch.owner {
            self.owner = v;
        }
        if let Some(v) = patch.admin {
            self.admin = v;
        }
        if let Some(v) = patch.banned {
            self.banned = v;
        }
        self.last_updated = Some(at);
    }
}
