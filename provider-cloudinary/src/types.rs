//! Cloudinary Admin API response types
//!
//! Data structures for deserializing Admin API listing responses.

use serde::{Deserialize, Serialize};

/// Cloudinary resource as returned by the Admin API listing
///
/// See: https://cloudinary.com/documentation/admin_api#get_resources
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageResource {
    /// Fully qualified identifier, embedding the folder path
    pub public_id: String,

    /// HTTPS delivery URL
    pub secure_url: String,

    /// Pixel width
    #[serde(default)]
    pub width: i64,

    /// Pixel height
    #[serde(default)]
    pub height: i64,

    /// Image format (e.g. "png", "jpg")
    #[serde(default)]
    pub format: String,
}

/// Admin API resources listing response
///
/// `next_cursor` is present only when more pages remain.
#[derive(Debug, Deserialize)]
pub struct ResourceListResponse {
    /// Resources on this page
    #[serde(default)]
    pub resources: Vec<ImageResource>,

    /// Opaque continuation cursor for the next page
    #[serde(default)]
    pub next_cursor: Option<String>,
}
