mod config;
mod routes;

use std::process::ExitCode;

use config::{HostConfig, HostError};

#[tokio::main]
async fn main() -> ExitCode {
    // .env is optional.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "school-records host failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    let app = routes::app()?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| HostError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, api = client::net::api::api_base_url(), "school-records listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
