//! Asset mirror server binary

use anyhow::Result;
use core_server::{MirrorServer, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();
    let server = MirrorServer::new(config).await?;

    server.run().await?;

    Ok(())
}
