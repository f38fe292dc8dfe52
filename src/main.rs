#![recursion_limit = "256"]

mod config;
mod proxy;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    let state = state::AppState::from_config(&config).expect("http client init failed");

    match &config.api_upstream {
        Some(upstream) => tracing::info!(%upstream, "forwarding /api to upstream"),
        None => tracing::warn!("API_UPSTREAM not set, /api requests will return 502"),
    }

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "blogdesk listening");
    axum::serve(listener, app).await.expect("server failed");
}
