use crate::{AuthError, RateLimitConfig, Result as AuthErrorResult};

use std::net::IpAddr;
use std::num::NonZeroU32;
use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::keyed::DefaultKeyedStateStore,
};

/// Per-client-address request limiter.
///
/// One shared limiter keyed by peer address. A client may spend its whole
/// window budget in a burst; the sustained rate refills at
/// `max_requests / window_secs` per second.
#[derive(Clone)]
pub struct ClientRateLimiter {
    limiter: Arc<RateLimiter<IpAddr, DefaultKeyedStateStore<IpAddr>, DefaultClock>>,
    config: RateLimitConfig,
}

impl ClientRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        let sustained = NonZeroU32::new(config.max_requests / config.window_secs.max(1) as u32)
            .unwrap_or(NonZeroU32::new(1).unwrap());
        let burst = NonZeroU32::new(config.max_requests).unwrap_or(sustained);
        let quota = Quota::per_second(sustained).allow_burst(burst);

        Self {
            limiter: Arc::new(RateLimiter::keyed(quota)),
            config,
        }
    }

    /// Check if a request from `addr` is allowed, returns error if rate limited
    #[track_caller]
    pub fn check(&self, addr: IpAddr) -> AuthErrorResult<()> {
        self.limiter
            .check_key(&addr)
            .map_err(|_| AuthError::RateLimitExceeded {
                limit: self.config.max_requests,
                window_secs: self.config.window_secs,
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl Default for ClientRateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}
