//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled HTTP client for the backend and the backend origin.

use std::sync::Arc;

use crate::config::HostConfig;
use crate::error::ProxyError;

/// Clone is required by Axum; all inner fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub backend_url: Arc<str>,
}

impl AppState {
    /// Build state with a client honouring the configured proxy timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::HttpClientBuild`] if the TLS backend cannot be
    /// initialised.
    pub fn new(config: &HostConfig) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(config.proxy_timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ProxyError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, backend_url: Arc::from(config.backend_url.as_str()) })
    }
}
