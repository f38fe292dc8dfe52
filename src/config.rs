//! Server configuration parsed from environment variables.
//!
//! Recognized:
//! - `PORT`: listen port, default 3000
//! - `API_UPSTREAM`: base URL of the blog API that `/api/*` is forwarded to
//! - `API_TIMEOUT_SECS`: upstream request timeout, default 30
//!
//! A `.env` file in the working directory is loaded by `main` before parsing.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("invalid API_UPSTREAM '{0}': expected an http(s) URL")]
    InvalidUpstream(String),

    #[error("invalid API_TIMEOUT_SECS: {0}")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Upstream base URL without a trailing slash.
    pub api_upstream: Option<String>,
    pub api_timeout_secs: u64,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let api_upstream = lookup("API_UPSTREAM")
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| parse_upstream(&raw))
            .transpose()?;
        let api_timeout_secs = match lookup("API_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => DEFAULT_API_TIMEOUT_SECS,
        };

        Ok(Self { port, api_upstream, api_timeout_secs })
    }
}

fn parse_upstream(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let has_scheme = trimmed.starts_with("http://") || trimmed.starts_with("https://");
    let has_host = trimmed.split_once("://").is_some_and(|(_, rest)| !rest.is_empty());
    if !has_scheme || !has_host {
        return Err(ConfigError::InvalidUpstream(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
