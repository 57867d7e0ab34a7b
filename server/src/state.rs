//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the auth collaborator behind a trait object plus the values derived
//! once from config at startup.

use std::sync::Arc;

use client::app::ClerkScript;
use client::net::types::EnvironmentCheck;

use crate::clerk::AuthCollaborator;
use crate::config::ServerConfig;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub clerk: Arc<dyn AuthCollaborator>,
    /// Key-presence flags served by the environment endpoint.
    pub environment: EnvironmentCheck,
    /// Script tag inputs for the SSR shell.
    pub clerk_script: ClerkScript,
}

impl AppState {
    #[must_use]
    pub fn new(clerk: Arc<dyn AuthCollaborator>, config: &ServerConfig) -> Self {
        Self { clerk, environment: config.environment(), clerk_script: config.clerk_script() }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
#[path = "state_helpers_test.rs"]
pub mod test_helpers;

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
