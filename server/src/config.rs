//! Server configuration parsed from environment variables.

use client::app::ClerkScript;
use client::net::types::EnvironmentCheck;

use crate::clerk::keys::{KeyError, PublishableKey};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CLERK_API_URL: &str = "https://api.clerk.com";
pub const DEFAULT_CLERK_JS_VERSION: &str = "5";
pub const DEFAULT_CLERK_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CLERK_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is unset or blank.
    #[error("missing required env var {0}")]
    MissingVar(&'static str),

    #[error("invalid CLERK_PUBLISHABLE_KEY: {0}")]
    InvalidPublishableKey(#[from] KeyError),

    #[error("invalid {var}: {value:?} is not a number")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClerkTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub publishable_key: PublishableKey,
    pub secret_key: Option<String>,
    pub api_url: String,
    /// Origins accepted in the session token's `azp` claim. Empty disables
    /// the check.
    pub authorized_parties: Vec<String>,
    pub timeouts: ClerkTimeouts,
    pub js_version: String,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Required:
    /// - `CLERK_PUBLISHABLE_KEY`
    ///
    /// Optional:
    /// - `CLERK_SECRET_KEY`: enables Backend API user lookup and session revoke
    /// - `CLERK_API_URL`: default `https://api.clerk.com`
    /// - `CLERK_AUTHORIZED_PARTIES`: comma-separated origins
    /// - `CLERK_REQUEST_TIMEOUT_SECS`: default 10
    /// - `CLERK_CONNECT_TIMEOUT_SECS`: default 5
    /// - `CLERK_JS_VERSION`: default `5`
    /// - `PORT`: default 3000
    ///
    /// # Errors
    ///
    /// Returns an error if the publishable key is missing or malformed, or a
    /// numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] but reads values through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };

        let raw_key = var("CLERK_PUBLISHABLE_KEY").ok_or(ConfigError::MissingVar("CLERK_PUBLISHABLE_KEY"))?;
        let publishable_key = PublishableKey::parse(&raw_key)?;
        let secret_key = var("CLERK_SECRET_KEY");

        let api_url = var("CLERK_API_URL")
            .unwrap_or_else(|| DEFAULT_CLERK_API_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let authorized_parties = var("CLERK_AUTHORIZED_PARTIES")
            .map(|raw| parse_list(&raw))
            .unwrap_or_default();
        let timeouts = ClerkTimeouts {
            request_secs: parse_number(
                "CLERK_REQUEST_TIMEOUT_SECS",
                var("CLERK_REQUEST_TIMEOUT_SECS"),
                DEFAULT_CLERK_REQUEST_TIMEOUT_SECS,
            )?,
            connect_secs: parse_number(
                "CLERK_CONNECT_TIMEOUT_SECS",
                var("CLERK_CONNECT_TIMEOUT_SECS"),
                DEFAULT_CLERK_CONNECT_TIMEOUT_SECS,
            )?,
        };
        let js_version = var("CLERK_JS_VERSION").unwrap_or_else(|| DEFAULT_CLERK_JS_VERSION.to_owned());
        let port = parse_number("PORT", var("PORT"), DEFAULT_PORT)?;

        Ok(Self { port, publishable_key, secret_key, api_url, authorized_parties, timeouts, js_version })
    }

    /// Key-presence flags reported to the UI.
    #[must_use]
    pub fn environment(&self) -> EnvironmentCheck {
        EnvironmentCheck { has_publishable_key: true, has_secret_key: self.secret_key.is_some() }
    }

    /// What the page shell needs to load ClerkJS.
    #[must_use]
    pub fn clerk_script(&self) -> ClerkScript {
        ClerkScript {
            publishable_key: self.publishable_key.as_str().to_owned(),
            frontend_api: self.publishable_key.frontend_api().to_owned(),
            js_version: self.js_version.clone(),
        }
    }
}

fn parse_number<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidNumber { var, value }),
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|item| item.trim().trim_end_matches('/'))
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
