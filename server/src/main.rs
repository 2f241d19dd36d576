use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use catalog_server::config::Config;
use catalog_server::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::parse();
    let state = AppState::from_config(&config)?;
    info!(database = %config.database, "store ready");

    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("listening on {addr}");
    catalog_server::run(listener, state).await?;
    Ok(())
}
