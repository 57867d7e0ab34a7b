//! Text reports rendered in the debug panel.
//!
//! Pure formatting over snapshots so the exact output can be asserted in
//! tests. Absent strings print as `None`; present strings are quoted so
//! empty values stay visible.

#[cfg(test)]
#[path = "debug_report_test.rs"]
mod debug_report_test;

use std::fmt::Write as _;

use super::profile::field_len;
use crate::net::types::{AuthStatus, UserProfile};
use crate::state::auth::AuthState;

fn quoted(value: Option<&str>) -> String {
    value.map_or_else(|| "None".to_owned(), |v| format!("\"{v}\""))
}

fn with_len(value: Option<&str>) -> String {
    format!("{} (length: {})", quoted(value), field_len(value))
}

fn user_id(status: &AuthStatus) -> &str {
    status.user_id.as_deref().unwrap_or("None")
}

/// Full availability report: fetched status, fetched profile with field
/// lengths, and the same fields as currently held by the store.
#[must_use]
pub fn availability_report(status: &AuthStatus, profile: &UserProfile, store: &AuthState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== CLERK STATE ===");
    let _ = writeln!(out, "Is signed in: {}", status.is_signed_in);
    let _ = writeln!(out, "User ID: {}", user_id(status));
    let _ = writeln!(out, "Auth checked: {}", status.auth_checked);
    let _ = writeln!(out);
    let _ = writeln!(out, "=== CLERK USER STATE ===");
    let _ = writeln!(out, "First name: {}", with_len(profile.first_name.as_deref()));
    let _ = writeln!(out, "Last name: {}", with_len(profile.last_name.as_deref()));
    let _ = writeln!(out, "Email: {}", with_len(profile.email_address.as_deref()));
    let _ = writeln!(out, "Username: {}", with_len(profile.username.as_deref()));
    let _ = writeln!(out, "Has image: {}", profile.has_image);
    let _ = writeln!(out, "Image URL: {}", with_len(Some(profile.image_url.as_str())));
    let _ = writeln!(out);
    let _ = writeln!(out, "=== STORE SNAPSHOT (should match the above) ===");
    let _ = writeln!(out, "Store first_name: {}", quoted(store.profile.first_name.as_deref()));
    let _ = writeln!(out, "Store email: {}", quoted(store.profile.email_address.as_deref()));
    let _ = write!(out, "Store user_id: {}", quoted(store.status.user_id.as_deref()));
    out
}

/// Short auth-state report for the "Inspect Clerk State" action.
#[must_use]
pub fn clerk_state_report(status: &AuthStatus, hydrated: bool) -> String {
    format!(
        "auth_checked: {}\nis_signed_in: {}\nuser_id: {}\npage hydrated: {hydrated}",
        status.auth_checked,
        status.is_signed_in,
        user_id(status),
    )
}

/// Profile report for the "Inspect Clerk State" action.
#[must_use]
pub fn user_state_report(profile: &UserProfile) -> String {
    format!(
        "User state:\nfirst_name: {}\nlast_name: {}\nemail_address: {}\nusername: {}\nhas_image: {}\nimage_url: {}",
        quoted(profile.first_name.as_deref()),
        quoted(profile.last_name.as_deref()),
        quoted(profile.email_address.as_deref()),
        quoted(profile.username.as_deref()),
        profile.has_image,
        quoted(Some(profile.image_url.as_str())),
    )
}

/// Diagnostic line for a failed retrieval.
#[must_use]
pub fn error_report(context: &str, error: &str) -> String {
    format!("Error {context}: {error}")
}
