//! Application state management
//!
//! One engine + query façade pair per mirrored asset kind, all sharing
//! a single database pool and remote store handle. The set of kinds and
//! their root folders is fixed per deployment, not runtime-configurable.

use std::collections::HashMap;
use std::sync::Arc;

use core_catalog::{AssetQuery, SqliteAssetRepository};
use core_sync::{EngineConfig, SyncEngine};
use provider_cloudinary::{CloudinaryConnector, ReqwestClient};
use sqlx::SqlitePool;
use store_traits::remote::AssetStore;

use crate::config::ServerConfig;

/// Asset kinds served by this instance: route segment → remote root folder
const ASSET_KINDS: &[(&str, &str)] = &[("templates", "Templates"), ("stickers", "Stickers")];

/// Engine and query façade for one asset kind
pub struct AssetService {
    /// Synchronization pipeline for this kind
    pub engine: SyncEngine,
    /// Read-side façade for this kind
    pub query: AssetQuery,
}

/// Shared application state
pub struct AppState {
    /// Server configuration
    pub config: ServerConfig,
    services: HashMap<&'static str, AssetService>,
}

impl AppState {
    /// Build state with the Cloudinary-backed store
    pub fn new(config: ServerConfig, pool: SqlitePool) -> Self {
        let http_client = Arc::new(ReqwestClient::new());
        let store: Arc<dyn AssetStore> = Arc::new(CloudinaryConnector::new(
            http_client,
            config.cloudinary.clone(),
        ));

        Self::with_store(config, pool, store)
    }

    /// Build state around an explicit store implementation
    ///
    /// Tests inject a scripted store here; production goes through
    /// [`AppState::new`].
    pub fn with_store(
        config: ServerConfig,
        pool: SqlitePool,
        store: Arc<dyn AssetStore>,
    ) -> Self {
        let mut services = HashMap::new();

        for (kind, root_folder) in ASSET_KINDS {
            let repository = Arc::new(SqliteAssetRepository::new(pool.clone(), *kind));

            let engine = SyncEngine::new(
                store.clone(),
                repository.clone(),
                EngineConfig::new(*root_folder)
                    .page_size(config.page_size)
                    .max_pages(config.max_pages),
            );

            let query = AssetQuery::new(repository);

            services.insert(*kind, AssetService { engine, query });
        }

        Self { config, services }
    }

    /// Look up the service for an asset kind route segment
    pub fn service(&self, kind: &str) -> Option<&AssetService> {
        self.services.get(kind)
    }
}
