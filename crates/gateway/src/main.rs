use std::sync::Arc;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::info;

use common::logger;
use publisher::FileSink;

use crate::config::Config;

mod api;
mod config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::setup_logger();
    dotenv().ok();
    info!("Signal bridge starting up...");

    let config = Config::from_env()?;
    info!("Publishing signals to: {}", config.signal_path.display());

    let sink: api::AppState = Arc::new(FileSink::new(&config.signal_path));
    let app = api::router(sink);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
