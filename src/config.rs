//! Connection parameters resolved from environment variables.

use crate::error::ConfigError;
use std::env::{self, VarError};
use std::fmt;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_USER: &str = "root";
pub const DEFAULT_PORT: u16 = 3306;

/// Host, user, password and port used for a single connection attempt.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionParams {
    pub host: String,
    pub user: String,
    pub password: String,
    pub port: u16,
}

impl ConnectionParams {
    /// Load connection parameters from `DB_HOST`, `DB_USER`, `DB_PASSWORD` and `DB_PORT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key))
    }

    /// Resolve parameters through `lookup`. Unset and empty values fall back to defaults;
    /// values that are not valid unicode are rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let var = |key: &str| match lookup(key) {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode {
                key: key.to_string(),
            }),
        };

        let host = var("DB_HOST")?.unwrap_or_else(|| DEFAULT_HOST.to_string());
        let user = var("DB_USER")?.unwrap_or_else(|| DEFAULT_USER.to_string());
        let password = var("DB_PASSWORD")?.unwrap_or_default();
        let port = match var("DB_PORT")? {
            Some(raw) => parse_port(&raw)?,
            None => DEFAULT_PORT,
        };

        Ok(ConnectionParams {
            host,
            user,
            password,
            port,
        })
    }

    /// What the diagnostic output shows in place of the password.
    pub fn masked_password(&self) -> &'static str {
        if self.password.is_empty() {
            "NO PASSWORD SET"
        } else {
            "***"
        }
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    match raw.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort {
            value: raw.to_string(),
        }),
    }
}

// Never print the password, even in debug output.
impl fmt::Debug for ConnectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionParams")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &self.masked_password())
            .field("port", &self.port)
            .finish()
    }
}
