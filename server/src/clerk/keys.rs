//! Clerk publishable key decoding.
//!
//! A publishable key is `pk_test_` or `pk_live_` followed by the base64
//! encoding of `<frontend-api-host>$`. The host is where ClerkJS and the
//! instance JWKS are served from.

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceKind {
    Development,
    Production,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("expected a pk_test_ or pk_live_ prefix")]
    UnknownPrefix,
    #[error("key payload is not valid base64")]
    InvalidEncoding,
    #[error("decoded key does not name a frontend API host")]
    InvalidHost,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishableKey {
    raw: String,
    kind: InstanceKind,
    frontend_api: String,
}

impl PublishableKey {
    /// Parse and validate a publishable key.
    ///
    /// # Errors
    ///
    /// Returns a [`KeyError`] when the prefix, encoding, or decoded host is
    /// not what Clerk issues.
    pub fn parse(raw: &str) -> Result<Self, KeyError> {
        let raw = raw.trim();
        let (kind, payload) = if let Some(payload) = raw.strip_prefix("pk_test_") {
            (InstanceKind::Development, payload)
        } else if let Some(payload) = raw.strip_prefix("pk_live_") {
            (InstanceKind::Production, payload)
        } else {
            return Err(KeyError::UnknownPrefix);
        };

        let payload = payload.trim_end_matches('=');
        let bytes = STANDARD_NO_PAD
            .decode(payload)
            .or_else(|_| URL_SAFE_NO_PAD.decode(payload))
            .map_err(|_| KeyError::InvalidEncoding)?;
        let decoded = String::from_utf8(bytes).map_err(|_| KeyError::InvalidEncoding)?;
        let host = decoded.strip_suffix('$').ok_or(KeyError::InvalidHost)?;
        if !is_host(host) {
            return Err(KeyError::InvalidHost);
        }

        Ok(Self { raw: raw.to_owned(), kind, frontend_api: host.to_owned() })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn kind(&self) -> InstanceKind {
        self.kind
    }

    /// Frontend API host, e.g. `clean-mole-12.clerk.accounts.dev`.
    #[must_use]
    pub fn frontend_api(&self) -> &str {
        &self.frontend_api
    }

    #[must_use]
    pub fn jwks_url(&self) -> String {
        format!("https://{}/.well-known/jwks.json", self.frontend_api)
    }
}

fn is_host(candidate: &str) -> bool {
    candidate.contains('.')
        && !candidate.starts_with('.')
        && !candidate.ends_with('.')
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | ':'))
}

#[cfg(test)]
#[path = "keys_test.rs"]
mod tests;
