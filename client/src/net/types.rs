//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server depends on this crate for SSR and serializes these same types
//! from its Clerk adapter, so both sides stay on a single schema.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Point-in-time authentication status reported by the auth collaborator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthStatus {
    /// `false` until the collaborator has produced its first answer.
    pub auth_checked: bool,
    pub is_signed_in: bool,
    /// Clerk user id (`user_...`) when signed in.
    #[serde(default)]
    pub user_id: Option<String>,
}

impl AuthStatus {
    /// Status for a request with no valid session.
    #[must_use]
    pub fn signed_out() -> Self {
        Self { auth_checked: true, is_signed_in: false, user_id: None }
    }

    /// Status for a verified session belonging to `user_id`.
    #[must_use]
    pub fn signed_in(user_id: impl Into<String>) -> Self {
        Self { auth_checked: true, is_signed_in: true, user_id: Some(user_id.into()) }
    }
}

/// Profile fields of the signed-in user. Every string may be empty or absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub has_image: bool,
    #[serde(default)]
    pub image_url: String,
}

/// Which Clerk credentials the server was started with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentCheck {
    pub has_publishable_key: bool,
    pub has_secret_key: bool,
}

/// Error body returned by the JSON API on collaborator failures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}
