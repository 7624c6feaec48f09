//! Server configuration
//!
//! All runtime configuration is resolved here, at the binary boundary;
//! core logic receives explicit values and never reads process state.

use provider_cloudinary::CloudinaryConfig;
use std::net::SocketAddr;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    pub listen_addr: SocketAddr,

    /// SQLite database file path
    pub database_path: String,

    /// Remote store credentials
    pub cloudinary: CloudinaryConfig,

    /// Items requested per listing page during sync
    pub page_size: u32,

    /// Upper bound on pages per sync walk
    pub max_pages: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            database_path: "mirror.db".to_string(),
            cloudinary: CloudinaryConfig::default(),
            page_size: 500,
            max_pages: 100,
        }
    }
}

impl ServerConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// Recognized variables: `PORT`, `DATABASE_PATH`,
    /// `CLOUDINARY_CLOUD_NAME`, `CLOUDINARY_API_KEY`,
    /// `CLOUDINARY_API_SECRET`.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(5000);

        let database_path =
            std::env::var("DATABASE_PATH").unwrap_or(defaults.database_path);

        let cloudinary = CloudinaryConfig::new(
            std::env::var("CLOUDINARY_CLOUD_NAME").unwrap_or_default(),
            std::env::var("CLOUDINARY_API_KEY").unwrap_or_default(),
            std::env::var("CLOUDINARY_API_SECRET").unwrap_or_default(),
        );

        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], port)),
            database_path,
            cloudinary,
            page_size: defaults.page_size,
            max_pages: defaults.max_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.listen_addr.port(), 5000);
        assert_eq!(config.page_size, 500);
        assert!(!config.cloudinary.is_configured());
    }
}
