//! Satlend API server binary

use anyhow::Result;

use satlend_api::{start_server, AppState};
use satlend_core::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("satlend=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .init();

    tracing::info!("Starting Satlend API");

    let state = AppState::with_config(AppConfig::default());
    start_server(state).await?;

    Ok(())
}
