//! Mount point for a hosted ClerkJS widget.
//!
//! The element ids must match the ones `/assets/clerk-bootstrap.js` looks up.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClerkWidget {
    SignIn,
    SignUp,
}

impl ClerkWidget {
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Self::SignIn => "clerk-sign-in",
            Self::SignUp => "clerk-sign-up",
        }
    }
}

#[component]
pub fn ClerkMount(widget: ClerkWidget) -> impl IntoView {
    view! {
        <div class="clerk-mount">
            <div id=widget.element_id()></div>
        </div>
    }
}
