//! Configuration module for the media API.
//!
//! Loads configuration from environment variables (and a `.env` file).

use std::env;
use std::time::Duration;

use thiserror::Error;

/// Default HTTP port when `PORT` is not set.
const DEFAULT_PORT: u16 = 3000;

/// Default database holding the `films` and `pokemon` collections.
const DEFAULT_DATABASE: &str = "media";

/// Errors raised while reading the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("MONGODB_URI (or DB_URI) must be set")]
    MissingUri,

    #[error("{name} must be a positive integer, got `{value}`")]
    InvalidNumber { name: &'static str, value: String },
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    // MongoDB
    pub mongodb_uri: String,
    pub mongodb_database: String,

    /// Upper bound for server selection and connection setup.
    /// `None` keeps the driver defaults.
    pub mongodb_timeout: Option<Duration>,

    // HTTP
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `DB_URI` is accepted as a fallback for `MONGODB_URI`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mongodb_uri = lookup("MONGODB_URI")
            .or_else(|| lookup("DB_URI"))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingUri)?;

        let mongodb_database = lookup("MONGODB_DATABASE")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        let port = match lookup("PORT") {
            Some(raw) => parse_positive("PORT", &raw)?,
            None => DEFAULT_PORT,
        };

        let mongodb_timeout = lookup("MONGODB_TIMEOUT_SECS")
            .map(|raw| parse_positive::<u64>("MONGODB_TIMEOUT_SECS", &raw))
            .transpose()?
            .map(Duration::from_secs);

        Ok(Self {
            mongodb_uri,
            mongodb_database,
            mongodb_timeout,
            port,
        })
    }
}

fn parse_positive<T>(name: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    match raw.trim().parse::<T>() {
        Ok(value) if value > T::default() => Ok(value),
        _ => Err(ConfigError::InvalidNumber {
            name,
            value: raw.to_string(),
        }),
    }
}
