//! Host server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("INVENTORY_API_URL must be an http(s) URL, got {0}")]
    InvalidUpstream(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Inventory backend base URL, without a trailing slash.
    pub upstream_url: String,
    pub upstream_timeout_secs: u64,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `INVENTORY_API_URL`: default `http://127.0.0.1:8000`
    /// - `INVENTORY_API_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but unparseable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_number(&lookup, "PORT", DEFAULT_PORT)?;
        let upstream_timeout_secs =
            parse_number(&lookup, "INVENTORY_API_TIMEOUT_SECS", DEFAULT_UPSTREAM_TIMEOUT_SECS)?;

        let raw_url = lookup("INVENTORY_API_URL").unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_owned());
        let upstream_url = raw_url.trim().trim_end_matches('/').to_owned();
        if !(upstream_url.starts_with("http://") || upstream_url.starts_with("https://")) {
            return Err(ConfigError::InvalidUpstream(raw_url));
        }

        Ok(Self { port, upstream_url, upstream_timeout_secs })
    }
}

fn parse_number<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { var, value }),
    }
}
