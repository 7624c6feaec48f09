//! # Asset Synchronization & Categorization Engine
//!
//! Mirrors a remote asset store's folder namespace into the local
//! catalog and folds the mirrored records into category groups.
//!
//! ## Components
//!
//! - **Pagination Walker** (`walker`): drives the store's cursor-based
//!   listing across all pages, degrading gracefully on page failures
//! - **Path Categorizer** (`categorize`): derives a category label from
//!   an asset's folder path
//! - **Reconciler** (`reconcile`): folds a collected asset set into the
//!   catalog via one idempotent bulk upsert
//! - **Category Aggregator** (`aggregate`): groups mirrored records by
//!   category for the response
//! - **Sync Engine** (`engine`): one reusable pipeline, instantiated per
//!   asset type with its own root folder and repository

pub mod aggregate;
pub mod categorize;
pub mod engine;
pub mod error;
pub mod reconcile;
pub mod walker;

pub use aggregate::aggregate;
pub use categorize::{categorize, folder_path, ROOT_CATEGORY};
pub use engine::{EngineConfig, SyncEngine, SyncReport};
pub use error::{Result, SyncError};
pub use reconcile::Reconciler;
pub use walker::{PaginationWalker, RemoteAsset, WalkOutcome};
