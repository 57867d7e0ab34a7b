//! Hosted sign-in page.

use leptos::prelude::*;

use crate::components::clerk_mount::{ClerkMount, ClerkWidget};

#[component]
pub fn SignInPage() -> impl IntoView {
    view! {
        <main class="page page--auth">
            <ClerkMount widget=ClerkWidget::SignIn/>
        </main>
    }
}
