use metrics::counter;

/// Metrics collector for HTTP operations
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "ft_server" }
    }

    /// Record a handled request by route tag
    pub fn request_handled(&self, route: &str) {
        counter!(format!("{}.requests.handled", self.prefix)).increment(1);
        counter!(format!("{}.requests.handled.{}", self.prefix, route)).increment(1);
    }

    /// Record a denied credential check
    pub fn auth_denied(&self) {
        counter!(format!("{}.auth.denied", self.prefix)).increment(1);
    }

    /// Record a rate-limited request
    pub fn rate_limited(&self) {
        counter!(format!("{}.requests.rate_limited", self.prefix)).increment(1);
    }

    /// Record a snapshot write failure after a successful merge
    pub fn persist_failure(&self) {
        counter!(format!("{}.store.persist_failures", self.prefix)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
