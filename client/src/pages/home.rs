//! Index page: picks the loading, signed-in, or signed-out branch.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders the loading branch (no snapshot yet). After hydration
//! the page waits for ClerkJS to refresh the session cookie, pulls fresh
//! snapshots into the auth store, and the branch follows the store. It then
//! subscribes to ClerkJS and pulls again whenever the active session changes
//! (sign-out elsewhere, expiry, session switch).

use leptos::prelude::*;

use crate::components::loading_view::LoadingView;
use crate::components::signed_in_view::SignedInView;
use crate::components::signed_out_view::SignedOutView;
#[cfg(feature = "hydrate")]
use crate::state::auth::SessionWatch;
use crate::state::auth::{AuthState, AuthView};

#[cfg(feature = "hydrate")]
async fn refresh_auth(auth: RwSignal<AuthState>) {
    use crate::net::types::AuthStatus;

    match crate::net::api::fetch_auth_status().await {
        Ok(status) => {
            let signed_in = status.is_signed_in;
            auth.update(|a| a.apply_status(status));
            if signed_in {
                match crate::net::api::fetch_user_profile().await {
                    Ok(profile) => auth.update(|a| a.apply_profile(profile)),
                    Err(e) => log::warn!("user profile fetch failed: {e}"),
                }
            }
        }
        Err(e) => {
            log::warn!("auth status fetch failed: {e}");
            auth.update(|a| a.apply_status(AuthStatus::signed_out()));
        }
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let branch = Memo::new(move |_| auth.get().view());

    #[cfg(feature = "hydrate")]
    crate::util::clerk_js::on_loaded(move || {
        use crate::util::clerk_js;

        let watch = std::cell::RefCell::new(SessionWatch::default());
        watch.borrow_mut().observe(clerk_js::session_id());
        leptos::task::spawn_local(refresh_auth(auth));

        clerk_js::on_session_change(move |session_id| {
            if watch.borrow_mut().observe(session_id) {
                leptos::task::spawn_local(refresh_auth(auth));
            }
        });
    });

    view! {
        <main class="page">
            {move || match branch.get() {
                AuthView::Loading => view! { <LoadingView/> }.into_any(),
                AuthView::SignedIn => view! { <SignedInView/> }.into_any(),
                AuthView::SignedOut => view! { <SignedOutView/> }.into_any(),
            }}
        </main>
    }
}
