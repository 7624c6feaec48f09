//! # Repository Pattern Implementation
//!
//! Repository trait and SQLite implementation for asset records. The
//! trait defines the storage boundary the sync engine and query façade
//! consume; the SQLite implementation scopes every operation to one
//! asset kind so each kind behaves as its own collection.

pub mod asset;

pub use asset::{AssetRepository, SqliteAssetRepository};
