//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle has no runtime environment, so storage settings are
//! baked in when the WASM artifact is compiled. Missing values fall back to
//! defaults that keep the UI renderable; uploads then fail at request time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Storage bucket used when `BLOGDESK_STORAGE_BUCKET` is not set at build time.
pub const DEFAULT_STORAGE_BUCKET: &str = "blogdesk.appspot.com";

/// Base URL of the Firebase Storage REST API.
pub const STORAGE_API_BASE: &str = "https://firebasestorage.googleapis.com/v0";

/// Settings for the image content store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageConfig {
    pub api_base: String,
    pub bucket: String,
}

impl StorageConfig {
    /// Read the bucket baked in at build time.
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("BLOGDESK_STORAGE_BUCKET"))
    }

    fn from_raw(bucket: Option<&str>) -> Self {
        let bucket = bucket
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .unwrap_or(DEFAULT_STORAGE_BUCKET);
        Self { api_base: STORAGE_API_BASE.to_owned(), bucket: bucket.to_owned() }
    }
}

/// Console log level for the browser build.
pub fn log_level() -> log::Level {
    parse_log_level(option_env!("BLOGDESK_LOG_LEVEL"))
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|v| v.parse::<log::Level>().ok())
        .unwrap_or(log::Level::Info)
}
