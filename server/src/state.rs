//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host keeps no sessions of its own, so the state is just configuration and
//! the optional upstream identity client.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::identity::{IdentityClient, IdentityError};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// `None` if `IDENTITY_UPSTREAM_URL` is not configured.
    pub identity: Option<IdentityClient>,
}

impl AppState {
    /// Build state from config, constructing the identity client if configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the identity HTTP client cannot be constructed.
    pub fn from_config(config: ServerConfig) -> Result<Self, IdentityError> {
        let identity = config
            .identity_upstream_url
            .clone()
            .map(|url| IdentityClient::new(url, config.identity_timeout_secs))
            .transpose()?;
        Ok(Self { config: Arc::new(config), identity })
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
