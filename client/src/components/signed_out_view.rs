//! Signed-out branch: prompt plus sign-in and sign-up actions.

use leptos::prelude::*;

use crate::app::{SIGN_IN_PATH, SIGN_UP_PATH};

/// Credentials of the shared Clerk development test user.
pub const TEST_CREDENTIALS_HINT: &str = "Try using: test+clerk_test@gmail.com with password: test-clerk-password";

#[component]
pub fn SignedOutView() -> impl IntoView {
    // `rel="external"` forces a full page load so the bootstrap script can
    // mount the ClerkJS widget on the target page.
    view! {
        <div class="auth-panel">
            <p class="auth-panel__title">"❌ Please sign in to continue"</p>
            <p class="auth-panel__hint">{TEST_CREDENTIALS_HINT}</p>
            <a class="btn btn--primary" href=SIGN_IN_PATH rel="external">"Sign in"</a>
            <a class="btn btn--success" href=SIGN_UP_PATH rel="external">"Sign up"</a>
        </div>
    }
}
