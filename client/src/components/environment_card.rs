//! Card reporting which Clerk keys the server was started with.

use leptos::prelude::*;

use crate::net::types::EnvironmentCheck;

#[cfg(test)]
#[path = "environment_card_test.rs"]
mod environment_card_test;

fn key_line(var: &str, present: Option<bool>) -> String {
    match present {
        Some(true) => format!("✅ Has {var}: true"),
        Some(false) => format!("⚠️ Has {var}: false"),
        None => format!("… Has {var}: unknown"),
    }
}

/// Display lines for the publishable and secret key checks.
pub(crate) fn environment_lines(env: Option<EnvironmentCheck>) -> [String; 2] {
    [
        key_line("CLERK_PUBLISHABLE_KEY", env.map(|e| e.has_publishable_key)),
        key_line("CLERK_SECRET_KEY", env.map(|e| e.has_secret_key)),
    ]
}

#[component]
pub fn EnvironmentCard() -> impl IntoView {
    let env = RwSignal::new(None::<EnvironmentCheck>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Some(check) = crate::net::api::fetch_environment().await {
            env.set(Some(check));
        }
    });

    view! {
        <div class="card card--env">
            <p class="card__title">"Environment Check:"</p>
            <p class="card__mono">{move || environment_lines(env.get())[0].clone()}</p>
            <p class="card__mono">{move || environment_lines(env.get())[1].clone()}</p>
        </div>
    }
}
