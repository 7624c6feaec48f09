//! # Store Boundary Traits
//!
//! Platform-agnostic abstractions for talking to the remote asset store:
//! an async HTTP client trait and the paginated listing boundary the sync
//! engine consumes. Concrete providers (e.g. `provider-cloudinary`)
//! implement these traits; the engine never sees transport details.

pub mod error;
pub mod http;
pub mod remote;

pub use error::{Result, StoreError};
pub use http::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
pub use remote::{AssetPage, AssetStore, StoreItem};
