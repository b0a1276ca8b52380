#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use std::process::ExitCode;

use config::HostConfig;
use error::HostError;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "skillmentor-admin exited");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), HostError> {
    let cfg = HostConfig::from_env()?;
    if cfg.app.clerk_publishable_key.is_empty() {
        tracing::warn!("CLERK_PUBLISHABLE_KEY not set; sign-in widget will not load");
    }

    let app = routes::app(cfg.app.clone())?;
    let addr = format!("0.0.0.0:{}", cfg.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| HostError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, backend = %cfg.app.backend_url, "skillmentor-admin listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
