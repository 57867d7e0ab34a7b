//! Debug state reader: fetch snapshots on demand and format them.
//!
//! Failures are caught here and turned into report text; nothing returned
//! from this module is an error.

#[cfg(test)]
#[path = "debug_reader_test.rs"]
mod debug_reader_test;

use super::debug_report::{availability_report, clerk_state_report, error_report, user_state_report};
use crate::net::api;
use crate::net::types::{AuthStatus, UserProfile};
use crate::state::auth::AuthState;

/// Source of auth snapshots. The browser implementation calls the JSON API.
#[allow(async_fn_in_trait)]
pub trait SnapshotSource {
    async fn auth_status(&self) -> Result<AuthStatus, String>;
    async fn user_profile(&self) -> Result<UserProfile, String>;
}

/// [`SnapshotSource`] backed by the server's `/api/clerk/*` endpoints.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApiSnapshots;

impl SnapshotSource for ApiSnapshots {
    async fn auth_status(&self) -> Result<AuthStatus, String> {
        api::fetch_auth_status().await
    }

    async fn user_profile(&self) -> Result<UserProfile, String> {
        api::fetch_user_profile().await
    }
}

/// Outcome of [`inspect_clerk_state`]. `info` is `None` when the status
/// fetch failed and the profile was never requested.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClerkStateInspection {
    pub clerk_state_info: String,
    pub info: Option<String>,
}

/// "Check User Data": fetch both snapshots and build the availability report.
pub async fn check_user_data<S: SnapshotSource>(source: &S, store: &AuthState) -> String {
    let status = match source.auth_status().await {
        Ok(status) => status,
        Err(e) => return error_report("checking user data availability", &e),
    };
    match source.user_profile().await {
        Ok(profile) => availability_report(&status, &profile, store),
        Err(e) => error_report("checking user data availability", &e),
    }
}

/// "Inspect Clerk State": report the auth status, then the profile.
pub async fn inspect_clerk_state<S: SnapshotSource>(source: &S, hydrated: bool) -> ClerkStateInspection {
    let status = match source.auth_status().await {
        Ok(status) => status,
        Err(e) => {
            return ClerkStateInspection { clerk_state_info: error_report("getting auth state", &e), info: None };
        }
    };
    let clerk_state_info = clerk_state_report(&status, hydrated);
    let info = match source.user_profile().await {
        Ok(profile) => user_state_report(&profile),
        Err(e) => error_report("getting user profile", &e),
    };
    ClerkStateInspection { clerk_state_info, info: Some(info) }
}
