use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;

/// Process-wide shared-secret gate for mutating and bulk-read operations.
///
/// One static credential, fixed at startup. There are no per-identity
/// scopes: a caller either holds the secret or it does not.
#[derive(Clone)]
pub struct AccessGuard {
    secret: Arc<str>,
}

impl AccessGuard {
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Check a presented credential against the configured secret.
    ///
    /// Missing and mismatched credentials are distinct outcomes; both deny.
    #[track_caller]
    pub fn authorize(&self, presented: Option<&str>) -> AuthErrorResult<()> {
        let presented = presented.ok_or(AuthError::MissingCredential {
            location: ErrorLocation::from(Location::caller()),
        })?;

        if !constant_time_eq(presented.as_bytes(), self.secret.as_bytes()) {
            return Err(AuthError::InvalidCredential {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}

/// Comparison that does not short-circuit on the first differing byte.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff: u8 = 0;
    for i in 0..a.len() {
        diff |= a[i] ^ b[i];
    }
    diff == 0
}
