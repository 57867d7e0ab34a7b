//! Session token verification against the instance JWKS.
//!
//! DESIGN
//! ======
//! ClerkJS keeps a short-lived RS256 session JWT in the `__session` cookie.
//! The verifier fetches the signing keys from the Frontend API, caches them,
//! and refetches when a token names an unknown `kid` (key rotation), at most
//! once per [`JWKS_REFETCH_INTERVAL`].
//!
//! A token that fails verification is a signed-out request, not an error.
//! Only an unreachable or malformed JWKS endpoint is reported as an error.

use std::time::{Duration, Instant};

use client::net::types::UserProfile;
use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use super::ClerkError;

/// Allowed clock skew when checking `exp` and `nbf`.
pub const CLOCK_SKEW_SECS: u64 = 5;
/// Minimum time between JWKS refetches triggered by unknown key ids.
pub const JWKS_REFETCH_INTERVAL: Duration = Duration::from_secs(30);

/// Claims carried by a Clerk session token. The profile fields are only
/// present when the instance customizes its session token template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Clerk user id.
    pub sub: String,
    /// Clerk session id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
    pub exp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<u64>,
    /// Origin that requested the token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl SessionClaims {
    /// Profile built from custom claims; fields the template omits stay empty.
    #[must_use]
    pub fn profile(&self) -> UserProfile {
        let image_url = self.image_url.clone().unwrap_or_default();
        UserProfile {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email_address: self.email.clone(),
            username: self.username.clone(),
            has_image: !image_url.is_empty(),
            image_url,
        }
    }
}

struct CachedJwks {
    keys: JwkSet,
    fetched_at: Instant,
}

pub struct SessionVerifier {
    http: reqwest::Client,
    jwks_url: String,
    authorized_parties: Vec<String>,
    cache: RwLock<Option<CachedJwks>>,
}

impl SessionVerifier {
    #[must_use]
    pub fn new(http: reqwest::Client, jwks_url: String, authorized_parties: Vec<String>) -> Self {
        Self { http, jwks_url, authorized_parties, cache: RwLock::new(None) }
    }

    /// Verifier with a pre-loaded key set that will not refetch for
    /// [`JWKS_REFETCH_INTERVAL`].
    #[must_use]
    pub fn with_jwks(
        http: reqwest::Client,
        jwks_url: String,
        authorized_parties: Vec<String>,
        keys: JwkSet,
    ) -> Self {
        let cached = CachedJwks { keys, fetched_at: Instant::now() };
        Self { http, jwks_url, authorized_parties, cache: RwLock::new(Some(cached)) }
    }

    /// Verify a session token.
    ///
    /// Returns `Ok(None)` for tokens that are malformed, expired, signed by an
    /// unknown key, or issued to an unauthorized party.
    ///
    /// # Errors
    ///
    /// Returns [`ClerkError::Jwks`] if the signing keys cannot be fetched.
    pub async fn verify(&self, token: &str) -> Result<Option<SessionClaims>, ClerkError> {
        let header = match decode_header(token) {
            Ok(header) => header,
            Err(e) => {
                tracing::debug!(error = %e, "session token header unreadable");
                return Ok(None);
            }
        };
        let Some(kid) = header.kid else {
            tracing::debug!("session token has no kid");
            return Ok(None);
        };
        let Some(key) = self.decoding_key(&kid).await? else {
            tracing::debug!(%kid, "session token signed by unknown key");
            return Ok(None);
        };

        let claims = match decode::<SessionClaims>(token, &key, &validation()) {
            Ok(data) => data.claims,
            Err(e) => {
                tracing::debug!(error = %e, "session token rejected");
                return Ok(None);
            }
        };

        if !self.is_authorized_party(claims.azp.as_deref()) {
            tracing::warn!(azp = ?claims.azp, "session token issued to unauthorized party");
            return Ok(None);
        }
        Ok(Some(claims))
    }

    fn is_authorized_party(&self, azp: Option<&str>) -> bool {
        match azp {
            Some(azp) if !self.authorized_parties.is_empty() => {
                let azp = azp.trim_end_matches('/');
                self.authorized_parties.iter().any(|p| p == azp)
            }
            _ => true,
        }
    }

    async fn decoding_key(&self, kid: &str) -> Result<Option<DecodingKey>, ClerkError> {
        if let Some(answer) = cached_key(self.cache.read().await.as_ref(), kid) {
            return answer;
        }

        // The write lock is held across the fetch so concurrent misses share
        // one request.
        let mut cache = self.cache.write().await;
        if let Some(answer) = cached_key(cache.as_ref(), kid) {
            return answer;
        }
        let keys = self.fetch_jwks().await?;
        let key = keys.find(kid).map(key_from_jwk).transpose()?;
        *cache = Some(CachedJwks { keys, fetched_at: Instant::now() });
        Ok(key)
    }

    async fn fetch_jwks(&self) -> Result<JwkSet, ClerkError> {
        tracing::debug!(url = %self.jwks_url, "fetching clerk jwks");
        let response = self
            .http
            .get(&self.jwks_url)
            .send()
            .await
            .map_err(|e| ClerkError::Jwks(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ClerkError::Jwks(e.to_string()))?;
        if !(200..300).contains(&status) {
            return Err(ClerkError::Jwks(format!("status {status}")));
        }
        parse_jwks(&text)
    }
}

/// Parse a JWKS document.
///
/// # Errors
///
/// Returns [`ClerkError::Jwks`] when the body is not a key set.
pub fn parse_jwks(text: &str) -> Result<JwkSet, ClerkError> {
    serde_json::from_str(text).map_err(|e| ClerkError::Jwks(format!("malformed key set: {e}")))
}

/// Answer from the cache alone, or `None` when the set must be refetched.
fn cached_key(cache: Option<&CachedJwks>, kid: &str) -> Option<Result<Option<DecodingKey>, ClerkError>> {
    let cached = cache?;
    if let Some(jwk) = cached.keys.find(kid) {
        return Some(key_from_jwk(jwk).map(Some));
    }
    (cached.fetched_at.elapsed() < JWKS_REFETCH_INTERVAL).then_some(Ok(None))
}

fn key_from_jwk(jwk: &jsonwebtoken::jwk::Jwk) -> Result<DecodingKey, ClerkError> {
    DecodingKey::from_jwk(jwk).map_err(|e| ClerkError::Jwks(format!("unusable key: {e}")))
}

fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::RS256);
    validation.leeway = CLOCK_SKEW_SECS;
    validation.validate_nbf = true;
    validation.validate_aud = false;
    validation.set_required_spec_claims(&["exp", "sub"]);
    validation
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
