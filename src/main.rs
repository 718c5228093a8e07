mod config;
mod error;
mod routes;
mod state;

use error::HostError;

#[tokio::main]
async fn main() -> Result<(), HostError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env()?;
    let state = state::AppState::new(&config)?;
    tracing::info!(backend = %config.backend_url, timeout_secs = config.proxy_timeout.as_secs(), "backend proxy configured");

    let app = routes::leptos_app(state).map_err(HostError::Leptos)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, "noticeboard listening");
    axum::serve(listener, app).await?;
    Ok(())
}
