//! Environment configuration.

use std::str::FromStr;

use dioxus_logger::tracing::Level;

use crate::server::error::config::ConfigError;

/// Used when neither `DATABASE_URL` nor the `POSTGRES_*` variables are configured.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data.sqlite3?mode=rwc";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_POSTGRES_PORT: u16 = 5432;
/// Minimum length of `SESSION_SECRET`, required to derive the cookie signing key.
pub const SESSION_SECRET_MIN_LEN: usize = 64;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub port: u16,
    pub session_secret: Option<String>,
    pub admin_password: Option<String>,
    pub admin_access_key: Option<String>,
    pub admin_delete_key: Option<String>,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from a variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_vars<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| get(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = match var("DATABASE_URL") {
            Some(url) => url,
            None => postgres_url(&var)?.unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
        };

        let port = match var("PORT") {
            Some(port) => port.parse::<u16>().map_err(|e| ConfigError::InvalidEnvValue {
                var: "PORT".to_string(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let session_secret = var("SESSION_SECRET");
        if let Some(secret) = &session_secret {
            if secret.len() < SESSION_SECRET_MIN_LEN {
                return Err(ConfigError::InvalidEnvValue {
                    var: "SESSION_SECRET".to_string(),
                    reason: format!("must be at least {} bytes", SESSION_SECRET_MIN_LEN),
                });
            }
        }

        let log_level = match var("LOG_LEVEL") {
            Some(level) => Level::from_str(&level).map_err(|e| ConfigError::InvalidEnvValue {
                var: "LOG_LEVEL".to_string(),
                reason: e.to_string(),
            })?,
            None => Level::INFO,
        };

        Ok(Self {
            database_url,
            bind_address: var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            port,
            session_secret,
            admin_password: get("ADMIN_PASSWORD").filter(|v| !v.is_empty()),
            admin_access_key: var("ADMIN_ACCESS_KEY"),
            admin_delete_key: var("ADMIN_DELETE_KEY"),
            log_level,
        })
    }

    /// `host:port` the listener binds to.
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

/// Builds a PostgreSQL URL from the `POSTGRES_*` variables.
///
/// Returns `Ok(None)` unless host, database, username and password are all set. The port is
/// optional.
fn postgres_url<F>(var: &F) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let (Some(host), Some(database), Some(username), Some(password)) = (
        var("POSTGRES_HOST"),
        var("POSTGRES_DATABASE"),
        var("POSTGRES_USERNAME"),
        var("POSTGRES_PASSWORD"),
    ) else {
        return Ok(None);
    };

    let port = match var("POSTGRES_PORT") {
        Some(port) => port.parse::<u16>().map_err(|e| ConfigError::InvalidEnvValue {
            var: "POSTGRES_PORT".to_string(),
            reason: e.to_string(),
        })?,
        None => DEFAULT_POSTGRES_PORT,
    };

    Ok(Some(format!(
        "postgres://{}:{}@{}:{}/{}?sslmode=require",
        username, password, host, port, database
    )))
}
