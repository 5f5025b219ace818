//! Error types for configuration loading and the connection probe.

use thiserror::Error;

/// Raised while resolving connection parameters from the environment.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("DB_PORT must be a valid port number (1-65535), got \"{value}\"")]
    InvalidPort { value: String },

    #[error("{key} is not valid unicode")]
    NotUnicode { key: String },
}

/// Any failure to reach the database: bad credentials, unreachable host,
/// DNS failure, protocol errors. Displays as the driver's message.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct ConnectionFailure(#[from] pub sqlx::Error);

