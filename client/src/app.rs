//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomePage, sign_in::SignInPage, sign_up::SignUpPage};
use crate::state::{auth::AuthState, debug::DebugState};

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

pub const SIGN_IN_PATH: &str = "/sign-in";
pub const SIGN_UP_PATH: &str = "/sign-up";

/// Served by the server crate; loads ClerkJS and mounts hosted widgets.
pub const BOOTSTRAP_SCRIPT_PATH: &str = "/assets/clerk-bootstrap.js";

/// What the page shell needs to load ClerkJS for this instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClerkScript {
    pub publishable_key: String,
    /// Frontend API host decoded from the publishable key.
    pub frontend_api: String,
    /// Major version of `@clerk/clerk-js` to load.
    pub js_version: String,
}

impl ClerkScript {
    /// URL of the ClerkJS browser bundle served by the Frontend API.
    #[must_use]
    pub fn src(&self) -> String {
        format!(
            "https://{}/npm/@clerk/clerk-js@{}/dist/clerk.browser.js",
            self.frontend_api, self.js_version
        )
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions, clerk: ClerkScript) -> impl IntoView {
    let clerk_src = clerk.src();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script
                    defer="defer"
                    src=BOOTSTRAP_SCRIPT_PATH
                    data-clerk-publishable-key={clerk.publishable_key}
                    data-clerk-src=clerk_src
                ></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth store and debug state, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let debug = RwSignal::new(DebugState::default());

    provide_context(auth);
    provide_context(debug);

    view! {
        <Stylesheet id="leptos" href="/pkg/clerk-demo.css"/>
        <Title text="Clerk Demo - Debug"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("sign-in") view=SignInPage/>
                <Route path=StaticSegment("sign-up") view=SignUpPage/>
            </Routes>
        </Router>
    }
}
