//! Clerk routes: auth status, profile, environment check, sign-out, and the
//! browser bootstrap script.

use std::convert::Infallible;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use client::net::types::{ApiError, AuthStatus, EnvironmentCheck, UserProfile};
use time::Duration;

use crate::clerk::ClerkError;
use crate::state::AppState;

/// Cookie ClerkJS stores the short-lived session JWT in.
pub const SESSION_COOKIE: &str = "__session";

const BOOTSTRAP_SCRIPT: &str = include_str!("../../assets/clerk-bootstrap.js");

// =============================================================================
// SESSION TOKEN EXTRACTOR
// =============================================================================

/// Raw session token carried by the request, if any. Never rejects; an
/// absent token simply means the request is signed out.
pub struct SessionToken(pub Option<String>);

impl<S> axum::extract::FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(session_token_from_headers(&parts.headers)))
    }
}

impl SessionToken {
    fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

/// Bearer `Authorization` header first (scheme matched case-insensitively),
/// then the `__session` cookie.
#[must_use]
pub fn session_token_from_headers(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim_start().split_once(' '))
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
        .map(|(_, token)| token.trim())
        .filter(|t| !t.is_empty());
    if let Some(token) = bearer {
        return Some(token.to_owned());
    }

    let jar = CookieJar::from_headers(headers);
    jar.get(SESSION_COOKIE)
        .map(Cookie::value)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
}

fn collaborator_error(context: &str, err: &ClerkError) -> Response {
    tracing::error!(error = %err, "{context} failed");
    let body = ApiError { error: err.to_string() };
    (StatusCode::BAD_GATEWAY, Json(body)).into_response()
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/clerk/state`: auth status for the current session.
pub async fn auth_state(State(state): State<AppState>, token: SessionToken) -> Result<Json<AuthStatus>, Response> {
    state
        .clerk
        .auth_status(token.as_deref())
        .await
        .map(Json)
        .map_err(|e| collaborator_error("auth status", &e))
}

/// `GET /api/clerk/user`: profile of the signed-in user, empty when signed out.
pub async fn user_profile(State(state): State<AppState>, token: SessionToken) -> Result<Json<UserProfile>, Response> {
    state
        .clerk
        .user_profile(token.as_deref())
        .await
        .map(Json)
        .map_err(|e| collaborator_error("user profile", &e))
}

/// `GET /api/clerk/environment`: which Clerk keys the server was started with.
pub async fn environment(State(state): State<AppState>) -> Json<EnvironmentCheck> {
    Json(state.environment)
}

/// `POST /api/clerk/sign-out`: revoke the session and clear the cookie.
///
/// The cookie is cleared even when the revoke call fails.
pub async fn sign_out(State(state): State<AppState>, token: SessionToken) -> impl IntoResponse {
    if let Err(e) = state.clerk.sign_out(token.as_deref()).await {
        tracing::warn!(error = %e, "clerk session revoke failed; clearing cookie anyway");
    }

    let cookie = Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(Duration::ZERO);

    let jar = CookieJar::new().add(cookie);
    (jar, StatusCode::NO_CONTENT)
}

/// `GET /assets/clerk-bootstrap.js`: loads ClerkJS and mounts hosted widgets.
pub async fn bootstrap_script() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        BOOTSTRAP_SCRIPT,
    )
}

#[cfg(test)]
#[path = "clerk_test.rs"]
mod tests;
