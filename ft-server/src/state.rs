use crate::Metrics;

use ft_auth::{AccessGuard, ClientRateLimiter};
use ft_store::RecordStore;

/// Shared state handed to every handler.
///
/// Built once by the composition root in `main`; everything inside is an
/// `Arc`-backed handle, so cloning per request is cheap.
#[derive(Clone)]
pub struct AppState {
    pub store: RecordStore,
    pub guard: AccessGuard,
    pub limiter: ClientRateLimiter,
    pub metrics: Metrics,
}
