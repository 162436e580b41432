#![recursion_limit = "256"]

mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; the process environment still applies.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    let port = config.port;

    match config.identity_upstream_url.as_deref() {
        Some(upstream) => tracing::info!(upstream, "identity upstream configured"),
        None => tracing::warn!("IDENTITY_UPSTREAM_URL not set; every visitor gets the restricted view"),
    }

    let state = state::AppState::from_config(config).expect("identity client init failed");
    let app = routes::leptos_app(state).expect("leptos app init failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "console listening");
    axum::serve(listener, app).await.expect("server failed");
}
