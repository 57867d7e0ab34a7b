//! REST API helpers for the server's Clerk endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, String>`. Callers turn the string into a
//! diagnostic message instead of panicking during hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthStatus, EnvironmentCheck, UserProfile};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ApiError;

pub const AUTH_STATE_ENDPOINT: &str = "/api/clerk/state";
pub const USER_PROFILE_ENDPOINT: &str = "/api/clerk/user";
pub const ENVIRONMENT_ENDPOINT: &str = "/api/clerk/environment";
pub const SIGN_OUT_ENDPOINT: &str = "/api/clerk/sign-out";

#[cfg(not(feature = "hydrate"))]
const NOT_AVAILABLE: &str = "not available on server";

/// Build the error string for a non-OK response, preferring the server's
/// `{"error": ...}` body over the raw text.
#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(endpoint: &str, status: u16, body: &str) -> String {
    let detail = serde_json::from_str::<ApiError>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| body.trim().to_owned());
    if detail.is_empty() {
        format!("{endpoint} failed: {status}")
    } else {
        format!("{endpoint} failed: {status} {detail}")
    }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(endpoint: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(endpoint)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(request_failed_message(endpoint, status, &body));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Fetch the current authentication status from `/api/clerk/state`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server reports that
/// the auth collaborator is unavailable.
pub async fn fetch_auth_status() -> Result<AuthStatus, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(AUTH_STATE_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Fetch the signed-in user's profile from `/api/clerk/user`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server reports that
/// the auth collaborator is unavailable.
pub async fn fetch_user_profile() -> Result<UserProfile, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(USER_PROFILE_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Fetch which Clerk keys the server was configured with.
/// Returns `None` on failure or on the server.
pub async fn fetch_environment() -> Option<EnvironmentCheck> {
    #[cfg(feature = "hydrate")]
    {
        get_json(ENVIRONMENT_ENDPOINT).await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// End the server-side session via `POST /api/clerk/sign-out`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn sign_out() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(SIGN_OUT_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(request_failed_message(SIGN_OUT_ENDPOINT, status, &body));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(NOT_AVAILABLE.to_owned())
    }
}
