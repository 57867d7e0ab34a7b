//! Card listing the signed-in user's profile fields straight from the store.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::profile::display_or_placeholder;

#[component]
fn ProfileRow(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="profile-row">
            <span class="profile-row__label">{label}</span>
            <span class="profile-row__value">{move || value.get()}</span>
        </div>
    }
}

#[component]
pub fn ProfileCard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let first_name = Signal::derive(move || display_or_placeholder(auth.get().profile.first_name.as_deref()));
    let last_name = Signal::derive(move || display_or_placeholder(auth.get().profile.last_name.as_deref()));
    let email = Signal::derive(move || display_or_placeholder(auth.get().profile.email_address.as_deref()));
    let username = Signal::derive(move || display_or_placeholder(auth.get().profile.username.as_deref()));
    let has_image = Signal::derive(move || auth.get().profile.has_image.to_string());

    view! {
        <div class="card card--profile">
            <p class="card__title">"Direct Profile Access:"</p>
            <ProfileRow label="First Name:" value=first_name/>
            <ProfileRow label="Last Name:" value=last_name/>
            <ProfileRow label="Email:" value=email/>
            <ProfileRow label="Username:" value=username/>
            <ProfileRow label="Has Image:" value=has_image/>
        </div>
    }
}
