//! Placeholder shown until the auth collaborator has answered.

use leptos::prelude::*;

#[component]
pub fn LoadingView() -> impl IntoView {
    view! {
        <div class="auth-loading">
            <p class="auth-loading__text">"⏳ Loading Clerk..."</p>
            <div class="spinner" role="status" aria-label="Loading"></div>
        </div>
    }
}
