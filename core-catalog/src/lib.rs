//! # Asset Catalog Module
//!
//! Owns the mirrored asset database and provides repository patterns
//! for data access.
//!
//! ## Overview
//!
//! This module manages:
//! - SQLite database schema and migrations
//! - The `AssetRecord` model and its upsert payload
//! - The `AssetRepository` boundary with a bulk-upsert SQLite implementation
//! - The read-side query façade (list, category lookup, filtered search)

pub mod db;
pub mod error;
pub mod models;
pub mod query;
pub mod repositories;

pub use db::{create_pool, create_test_pool, DatabaseConfig};
pub use error::{CatalogError, Result};
pub use models::{
    decode_url_name, encode_url_name, AssetRecord, AssetUpsert, CategoryGroup, SearchFilter,
};
pub use query::AssetQuery;
pub use repositories::{AssetRepository, SqliteAssetRepository};
