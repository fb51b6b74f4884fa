#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("http client init failed: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error(transparent)]
    Leptos(#[from] routes::LeptosConfigError),
    #[error("failed to bind port {port}: {source}")]
    Bind { port: u16, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env()?;
    let state = state::AppState::new(&config)?;
    let app = routes::app(state)?;

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .map_err(|source| StartupError::Bind { port, source })?;

    tracing::info!(%port, upstream = %config.upstream_url, "stockroom listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
