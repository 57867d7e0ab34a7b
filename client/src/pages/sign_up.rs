//! Hosted sign-up page.

use leptos::prelude::*;

use crate::components::clerk_mount::{ClerkMount, ClerkWidget};

#[component]
pub fn SignUpPage() -> impl IntoView {
    view! {
        <main class="page page--auth">
            <ClerkMount widget=ClerkWidget::SignUp/>
        </main>
    }
}
