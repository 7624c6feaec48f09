//! Asset Mirror HTTP Server
//!
//! A thin HTTP REST API over the sync engine and catalog: triggers
//! category syncs and serves category/search queries against the local
//! mirror.
//!
//! # Endpoints
//!
//! - `GET  /health` — liveness probe
//! - `GET  /api/:kind/categories` — sync + grouped categories
//! - `POST /api/:kind/category` — records for one category
//! - `GET  /api/:kind/search` — conjunctive filtered search
//! - `GET  /api/:kind/all` — full listing
//!
//! # Example
//!
//! ```ignore
//! use core_server::{MirrorServer, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig::from_env();
//!     let server = MirrorServer::new(config).await.unwrap();
//!     server.run().await.unwrap();
//! }
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::{AppState, AssetService};

use axum::Router;
use core_catalog::DatabaseConfig;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Asset Mirror HTTP server
pub struct MirrorServer {
    /// Application state
    state: Arc<AppState>,
    /// Configured router
    router: Router,
}

impl MirrorServer {
    /// Create a new server with the given configuration
    ///
    /// Opens the database pool (running migrations) and wires one sync
    /// engine per asset kind.
    pub async fn new(config: ServerConfig) -> Result<Self> {
        let pool = core_catalog::create_pool(DatabaseConfig::new(&config.database_path)).await?;

        let state = Arc::new(AppState::new(config, pool));
        let router = routes::build_router(state.clone());

        Ok(Self { state, router })
    }

    /// Get a reference to the application state
    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Get the router for testing
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server
    pub async fn run(self) -> std::io::Result<()> {
        let addr = self.state.config.listen_addr;
        let listener = TcpListener::bind(addr).await?;

        info!(
            addr = %addr,
            database = %self.state.config.database_path,
            store_configured = self.state.config.cloudinary.is_configured(),
            "Asset mirror server starting"
        );

        axum::serve(listener, self.router).await
    }
}
