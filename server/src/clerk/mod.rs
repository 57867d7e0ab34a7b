//! Clerk collaborator: session status, user profile, and sign-out.
//!
//! DESIGN
//! ======
//! Handlers depend on the [`AuthCollaborator`] trait so tests can swap in a
//! mock. [`ClerkClient`] is the real implementation: it verifies the session
//! token locally against the instance JWKS and, when `CLERK_SECRET_KEY` is
//! configured, reads the user record and revokes sessions through the
//! Backend API.
//!
//! Without a secret key the profile falls back to whatever custom claims the
//! session token carries, and sign-out only clears the browser cookie.

pub mod backend;
pub mod keys;
pub mod session;

#[cfg(test)]
pub mod test_support;

use std::time::Duration;

use client::net::types::{AuthStatus, UserProfile};

use crate::config::ServerConfig;
use backend::BackendApi;
use session::{SessionClaims, SessionVerifier};

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClerkError {
    /// The instance signing keys could not be fetched or used.
    #[error("jwks unavailable: {0}")]
    Jwks(String),

    /// The HTTP request to the Backend API failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The Backend API returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The Backend API response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// A user or session id from the token is not safe to put in a URL.
    #[error("invalid clerk id: {0:?}")]
    InvalidId(String),
}

// =============================================================================
// COLLABORATOR TRAIT
// =============================================================================

/// Everything the HTTP layer needs from the auth provider. Every method
/// takes the raw session token, if the request carried one.
#[async_trait::async_trait]
pub trait AuthCollaborator: Send + Sync {
    /// Signed-in state for the request.
    ///
    /// # Errors
    ///
    /// Returns a [`ClerkError`] when the provider cannot be reached. An
    /// invalid or expired token is a signed-out status, not an error.
    async fn auth_status(&self, token: Option<&str>) -> Result<AuthStatus, ClerkError>;

    /// Profile of the signed-in user; empty when signed out.
    ///
    /// # Errors
    ///
    /// Returns a [`ClerkError`] when the provider cannot be reached or
    /// answers with something unreadable.
    async fn user_profile(&self, token: Option<&str>) -> Result<UserProfile, ClerkError>;

    /// End the session named by the token, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`ClerkError`] when the revoke call fails.
    async fn sign_out(&self, token: Option<&str>) -> Result<(), ClerkError>;
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct ClerkClient {
    verifier: SessionVerifier,
    backend: Option<BackendApi>,
}

impl ClerkClient {
    /// Build a client from server config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: &ServerConfig) -> Result<Self, ClerkError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ClerkError::HttpClientBuild(e.to_string()))?;

        let verifier = SessionVerifier::new(
            http.clone(),
            config.publishable_key.jwks_url(),
            config.authorized_parties.clone(),
        );
        let backend = config
            .secret_key
            .clone()
            .map(|secret| BackendApi::new(http, config.api_url.clone(), secret));
        Ok(Self::new(verifier, backend))
    }

    #[must_use]
    pub fn new(verifier: SessionVerifier, backend: Option<BackendApi>) -> Self {
        Self { verifier, backend }
    }

    async fn claims(&self, token: Option<&str>) -> Result<Option<SessionClaims>, ClerkError> {
        match token {
            Some(token) if !token.is_empty() => self.verifier.verify(token).await,
            _ => Ok(None),
        }
    }
}

#[async_trait::async_trait]
impl AuthCollaborator for ClerkClient {
    async fn auth_status(&self, token: Option<&str>) -> Result<AuthStatus, ClerkError> {
        let claims = self.claims(token).await?;
        Ok(status_from_claims(claims.as_ref()))
    }

    async fn user_profile(&self, token: Option<&str>) -> Result<UserProfile, ClerkError> {
        let Some(claims) = self.claims(token).await? else {
            return Ok(UserProfile::default());
        };
        match &self.backend {
            Some(backend) => backend.get_user(&claims.sub).await,
            None => Ok(claims.profile()),
        }
    }

    async fn sign_out(&self, token: Option<&str>) -> Result<(), ClerkError> {
        let Some(claims) = self.claims(token).await? else {
            return Ok(());
        };
        match (&self.backend, claims.sid.as_deref()) {
            (Some(backend), Some(sid)) => backend.revoke_session(sid).await,
            _ => Ok(()),
        }
    }
}

/// Auth status for verified claims; `None` means signed out.
#[must_use]
pub fn status_from_claims(claims: Option<&SessionClaims>) -> AuthStatus {
    match claims {
        Some(claims) => AuthStatus::signed_in(claims.sub.clone()),
        None => AuthStatus::signed_out(),
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
