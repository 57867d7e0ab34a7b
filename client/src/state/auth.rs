//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one `RwSignal<AuthState>` and provides it via context. The
//! home page writes snapshots into it; every view that depends on auth reads
//! it and re-renders when it changes.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{AuthStatus, UserProfile};

/// Latest snapshots received from the auth collaborator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub status: AuthStatus,
    pub profile: UserProfile,
}

impl AuthState {
    /// Store a fresh status snapshot. A signed-out status also clears any
    /// profile left over from a previous session.
    pub fn apply_status(&mut self, status: AuthStatus) {
        if !status.is_signed_in {
            self.profile = UserProfile::default();
        }
        self.status = status;
    }

    pub fn apply_profile(&mut self, profile: UserProfile) {
        self.profile = profile;
    }

    /// Drop back to signed-out after a local sign-out.
    pub fn clear_session(&mut self) {
        self.apply_status(AuthStatus::signed_out());
    }

    #[must_use]
    pub fn view(&self) -> AuthView {
        AuthView::of(&self.status)
    }
}

/// The three mutually exclusive branches of the index page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthView {
    Loading,
    SignedIn,
    SignedOut,
}

impl AuthView {
    /// Select the branch for a status snapshot. Nothing but `auth_checked`
    /// matters until the collaborator has answered.
    #[must_use]
    pub fn of(status: &AuthStatus) -> Self {
        match (status.auth_checked, status.is_signed_in) {
            (false, _) => Self::Loading,
            (true, true) => Self::SignedIn,
            (true, false) => Self::SignedOut,
        }
    }
}

/// Last Clerk session id the page refreshed for. ClerkJS notifies its
/// listeners on every resource update; only a different session (including
/// none) warrants pulling new snapshots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionWatch {
    seen: Option<Option<String>>,
}

impl SessionWatch {
    /// Record `session_id` and report whether it differs from the previous
    /// observation. The first observation always counts as a change.
    pub fn observe(&mut self, session_id: Option<String>) -> bool {
        if self.seen.as_ref() == Some(&session_id) {
            return false;
        }
        self.seen = Some(session_id);
        true
    }
}
