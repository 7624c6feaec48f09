//! # Cloudinary Provider
//!
//! Implements the `AssetStore` trait over the Cloudinary Admin API:
//! paginated resource listing under a folder-path prefix, with Basic
//! authentication and retry on transient failures.

pub mod connector;
pub mod error;
pub mod http;
pub mod types;

pub use connector::{CloudinaryConfig, CloudinaryConnector};
pub use error::{CloudinaryError, Result};
pub use http::ReqwestClient;
