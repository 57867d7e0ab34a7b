mod clerk;
mod config;
mod routes;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; the process environment still applies.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration; set CLERK_PUBLISHABLE_KEY in .env");
            std::process::exit(1);
        }
    };

    if config.secret_key.is_none() {
        tracing::warn!("CLERK_SECRET_KEY not set; profile comes from session claims and sign-out is local only");
    }

    let clerk = clerk::ClerkClient::from_config(&config).expect("clerk client init failed");
    tracing::info!(
        frontend_api = config.publishable_key.frontend_api(),
        kind = ?config.publishable_key.kind(),
        "clerk client initialized"
    );

    let state = state::AppState::new(Arc::new(clerk), &config);
    let app = routes::leptos_app(state).expect("leptos app init failed");

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "clerk demo listening");
    axum::serve(listener, app).await.expect("server failed");
}
