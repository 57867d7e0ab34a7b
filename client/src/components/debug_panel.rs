//! Debug panel probing auth-state timing and data availability.
//!
//! Buttons run the debug reader against the JSON API and write its text into
//! the shared `DebugState`.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::debug::DebugState;

#[component]
pub fn DebugPanel() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let debug = expect_context::<RwSignal<DebugState>>();

    let on_check = move |_| {
        if debug.get_untracked().busy {
            return;
        }
        debug.update(|d| d.busy = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let store = auth.get_untracked();
            let report = crate::util::debug_reader::check_user_data(&crate::util::debug_reader::ApiSnapshots, &store).await;
            debug.update(|d| {
                d.info = report;
                d.busy = false;
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = auth;
    };

    let on_inspect = move |_| {
        if debug.get_untracked().busy {
            return;
        }
        debug.update(|d| d.busy = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let inspection = crate::util::debug_reader::inspect_clerk_state(&crate::util::debug_reader::ApiSnapshots, true).await;
            debug.update(|d| {
                d.apply_inspection(inspection);
                d.busy = false;
            });
        });
    };

    view! {
        <div class="debug-panel">
            <div class="debug-panel__actions">
                <button class="btn btn--primary" on:click=on_check disabled=move || debug.get().busy>
                    "Check User Data"
                </button>
                <button class="btn" on:click=on_inspect disabled=move || debug.get().busy>
                    "Inspect Clerk State"
                </button>
            </div>
            <div class="card card--info">
                <p class="card__title">"Complete Debug Info:"</p>
                <pre class="debug-panel__output">{move || debug.get().info}</pre>
            </div>
            <div class="card card--info">
                <p class="card__title">"Clerk State:"</p>
                <pre class="debug-panel__output">{move || debug.get().clerk_state_info}</pre>
            </div>
        </div>
    }
}
