//! Signed-in branch: welcome, debug tooling, profile, environment, sign-out.

use leptos::prelude::*;

use super::debug_panel::DebugPanel;
use super::environment_card::EnvironmentCard;
use super::profile_card::ProfileCard;
use crate::state::auth::AuthState;
use crate::state::debug::DebugState;

#[component]
pub fn SignedInView() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let debug = expect_context::<RwSignal<DebugState>>();
    let signing_out = RwSignal::new(false);

    let on_sign_out = move |_| {
        if signing_out.get_untracked() {
            return;
        }
        signing_out.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::sign_out().await {
                log::warn!("server sign-out failed: {e}");
            }
            if let Err(e) = crate::util::clerk_js::sign_out().await {
                log::warn!("clerk sign-out failed: {e}");
            }
            auth.update(AuthState::clear_session);
            debug.set(DebugState::default());
            signing_out.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (auth, debug);
    };

    view! {
        <div class="auth-panel auth-panel--signed-in">
            <p class="auth-panel__title auth-panel__title--ok">"✅ Welcome! You are signed in."</p>
            <DebugPanel/>
            <ProfileCard/>
            <EnvironmentCard/>
            <button class="btn btn--danger" on:click=on_sign_out disabled=move || signing_out.get()>
                "Sign out"
            </button>
        </div>
    }
}
