//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the Clerk JSON endpoints and stitches them with Leptos
//! SSR rendering under a single Axum router. The page routes (`/`,
//! `/sign-in`, `/sign-up`) are generated from the client crate's route list.

pub mod clerk;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use client::app::BOOTSTRAP_SCRIPT_PATH;
use client::net::api::{AUTH_STATE_ENDPOINT, ENVIRONMENT_ENDPOINT, SIGN_OUT_ENDPOINT, USER_PROFILE_ENDPOINT};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API and static script routes.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route(AUTH_STATE_ENDPOINT, get(clerk::auth_state))
        .route(USER_PROFILE_ENDPOINT, get(clerk::user_profile))
        .route(ENVIRONMENT_ENDPOINT, get(clerk::environment))
        .route(SIGN_OUT_ENDPOINT, post(clerk::sign_out))
        .route(BOOTSTRAP_SCRIPT_PATH, get(clerk::bootstrap_script))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Leptos SSR frontend: API routes + Leptos SSR pages + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            let clerk_script = state.clerk_script.clone();
            move || client::app::shell(opts.clone(), clerk_script.clone())
        })
        .with_state(leptos_options.clone());

    // Serve Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
