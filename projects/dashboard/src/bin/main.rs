use anyhow::Result;
use axum::serve;
use projects_dashboard::{
    config::{load_dotenv, Config, ConfigError},
    domain::repos::GitHubRepos,
    endpoints::router,
};
use thiserror::Error;
use tracing::info;
use utils_trace::init as tracing_init;

#[derive(Debug, Error)]
pub enum MainError {
    #[error("TracingInit: {source}")]
    TracingInit {
        #[source]
        source: utils_trace::TracingInitError,
    },
    #[error("Config: {source}")]
    Config {
        #[source]
        source: ConfigError,
    },
    #[error("TcpListenerBind: {source}")]
    TcpListenerBind {
        #[source]
        source: std::io::Error,
    },
    #[error("Serve: {source}")]
    Serve {
        #[source]
        source: std::io::Error,
    },
}

#[tokio::main]
async fn main() -> Result<(), MainError> {
    tracing_init("info")
        .map_err(|source| MainError::TracingInit { source })?;

    load_dotenv();
    let config = Config::from_env()
        .map_err(|source| MainError::Config { source })?;
    let addr = config.bind_addr;
    let username = config.username.clone();

    let app = router(GitHubRepos::new(config));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| MainError::TcpListenerBind { source })?;

    info!("GitHub dashboard starting on http://{}", addr);
    info!("Fetching repos for user: {}", username);

    serve(listener, app)
        .await
        .map_err(|source| MainError::Serve { source })?;

    Ok(())
}
