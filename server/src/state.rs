//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled `reqwest::Client` for the inventory backend and the
//! backend's base URL; the relay is otherwise stateless.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;

/// Shared application state. Clone is required by Axum; fields are cheap to
/// clone.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub upstream: Arc<str>,
}

impl AppState {
    /// Build the backend client with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` error if the TLS backend cannot be initialized.
    pub fn new(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()?;
        Ok(Self { http, upstream: Arc::from(config.upstream_url.as_str()) })
    }
}
