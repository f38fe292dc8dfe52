//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the optional upstream API client; everything else the UI needs is
//! rendered by Leptos.

use crate::config::ServerConfig;
use crate::proxy::ApiProxy;

#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Present when `API_UPSTREAM` is configured.
    pub proxy: Option<ApiProxy>,
}

impl AppState {
    /// Build state from parsed configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the upstream HTTP client cannot be constructed.
    pub fn from_config(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        let proxy = config
            .api_upstream
            .clone()
            .map(|upstream| ApiProxy::new(upstream, config.api_timeout_secs))
            .transpose()?;
        Ok(Self { proxy })
    }
}
