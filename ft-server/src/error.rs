use std::net::AddrParseError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid BIND_ADDR: {source}")]
    InvalidBindAddr {
        #[source]
        source: AddrParseError,
    },

    #[error("API_SECRET must not be empty")]
    EmptySecret,

    #[error("Config error: {message}")]
    Config { message: String },

    #[error("Failed to initialize logger: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
