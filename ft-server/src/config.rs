use crate::error::{Result as ServerErrorResult, ServerError};

use ft_auth::RateLimitConfig;

use std::net::SocketAddr;
use std::path::PathBuf;

use log::LevelFilter;

/// Default credential shipped in the example configuration; flagged loudly
/// at startup when still in use.
pub const DEFAULT_API_SECRET: &str = "change_this_in_prod";

// Rate limit constraints
pub const MIN_RATE_LIMIT_REQUESTS: u32 = 1;
pub const MAX_RATE_LIMIT_REQUESTS: u32 = 10000;
pub const DEFAULT_RATE_LIMIT_REQUESTS: u32 = 120;

pub const MIN_RATE_LIMIT_WINDOW_SECS: u64 = 1;
pub const MAX_RATE_LIMIT_WINDOW_SECS: u64 = 3600;
pub const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 60;

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (default: 0.0.0.0:3000)
    pub bind_addr: SocketAddr,

    /// Shared secret gating the update and bulk-read routes
    pub api_secret: String,

    /// Snapshot file path (default: db.json)
    pub data_file: PathBuf,

    /// Per-address request ceiling
    pub rate_limit: RateLimitConfig,

    /// Log level (default: info)
    pub log_level: LevelFilter,

    /// Enable colored logs (default: true)
    pub log_colored: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> ServerErrorResult<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .map_err(|source| ServerError::InvalidBindAddr { source })?;

        let config = Self {
            bind_addr,

            api_secret: std::env::var("API_SECRET")
                .unwrap_or_else(|_| DEFAULT_API_SECRET.to_string()),

            data_file: std::env::var("DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("db.json")),

            rate_limit: RateLimitConfig {
                max_requests: std::env::var("RATE_LIMIT_REQUESTS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_RATE_LIMIT_REQUESTS),

                window_secs: std::env::var("RATE_LIMIT_WINDOW_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_RATE_LIMIT_WINDOW_SECS),
            },

            log_level: std::env::var("LOG_LEVEL")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(LevelFilter::Info),

            log_colored: std::env::var("LOG_COLORED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> ServerErrorResult<()> {
        if self.api_secret.is_empty() {
            return Err(ServerError::EmptySecret);
        }

        if self.api_secret == DEFAULT_API_SECRET {
            log::warn!("API_SECRET is the default value; set a real secret before exposing this server");
        }

        if self.rate_limit.max_requests < MIN_RATE_LIMIT_REQUESTS
            || self.rate_limit.max_requests > MAX_RATE_LIMIT_REQUESTS
        {
            return Err(ServerError::Config {
                message: format!(
                    "RATE_LIMIT_REQUESTS must be {}-{}, got {}",
                    MIN_RATE_LIMIT_REQUESTS, MAX_RATE_LIMIT_REQUESTS, self.rate_limit.max_requests
                ),
            });
        }

        if self.rate_limit.window_secs < MIN_RATE_LIMIT_WINDOW_SECS
            || self.rate_limit.window_secs > MAX_RATE_LIMIT_WINDOW_SECS
        {
            return Err(ServerError::Config {
                message: format!(
                    "RATE_LIMIT_WINDOW_SECS must be {}-{}, got {}",
                    MIN_RATE_LIMIT_WINDOW_SECS, MAX_RATE_LIMIT_WINDOW_SECS, self.rate_limit.window_secs
                ),
            });
        }

        Ok(())
    }

    /// Log the effective configuration at startup (secret elided)
    pub fn log_summary(&self) {
        log::info!(
            "Config: bind={}, data_file={}, rate_limit={}/{}s, log_level={}",
            self.bind_addr,
            self.data_file.display(),
            self.rate_limit.max_requests,
            self.rate_limit.window_secs,
            self.log_level,
        );
    }
}
