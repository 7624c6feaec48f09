//! Cloudinary Admin API connector implementation
//!
//! Implements the `AssetStore` trait for the Cloudinary Admin API.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use store_traits::error::Result;
use store_traits::http::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use store_traits::remote::{AssetPage, AssetStore, StoreItem};

use crate::error::CloudinaryError;
use crate::types::{ImageResource, ResourceListResponse};

/// Cloudinary Admin API base URL
const API_BASE: &str = "https://api.cloudinary.com/v1_1";

/// Maximum results per page (Admin API limit)
const MAX_PAGE_SIZE: u32 = 500;

/// Cloudinary account configuration
///
/// Passed explicitly at connector construction; core logic never reads
/// ambient process state.
#[derive(Debug, Clone, Default)]
pub struct CloudinaryConfig {
    /// Cloud name segment of the API URL
    pub cloud_name: String,
    /// Admin API key
    pub api_key: String,
    /// Admin API secret
    pub api_secret: String,
}

impl CloudinaryConfig {
    pub fn new(
        cloud_name: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            cloud_name: cloud_name.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// All three credential fields are non-blank
    pub fn is_configured(&self) -> bool {
        !self.cloud_name.trim().is_empty()
            && !self.api_key.trim().is_empty()
            && !self.api_secret.trim().is_empty()
    }
}

/// Cloudinary Admin API connector
///
/// Lists image resources under a folder-path prefix, one page at a time,
/// threading the Admin API's opaque `next_cursor` token.
///
/// # Example
///
/// ```ignore
/// use provider_cloudinary::{CloudinaryConfig, CloudinaryConnector};
/// use store_traits::remote::AssetStore;
///
/// let connector = CloudinaryConnector::new(http_client, config);
/// let page = connector.list_page("Templates/", 500, None).await?;
/// ```
pub struct CloudinaryConnector {
    /// HTTP client for API requests
    http_client: Arc<dyn HttpClient>,

    /// Account credentials
    config: CloudinaryConfig,
}

impl CloudinaryConnector {
    /// Create a new Cloudinary connector
    ///
    /// A connector with blank credentials is still constructible; every
    /// listing call will fail with a missing-credentials error, which
    /// callers treat as a degraded (empty) walk.
    pub fn new(http_client: Arc<dyn HttpClient>, config: CloudinaryConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Build Basic authorization header value
    fn auth_header(&self) -> String {
        let credentials = format!("{}:{}", self.config.api_key, self.config.api_secret);
        format!("Basic {}", BASE64.encode(credentials))
    }

    /// Convert an API resource into a store item
    fn convert_resource(resource: ImageResource) -> StoreItem {
        StoreItem {
            id: resource.public_id,
            url: resource.secure_url,
            width: resource.width,
            height: resource.height,
            format: resource.format,
        }
    }

    /// Execute API request with retry logic
    ///
    /// Retries 429 and 5xx responses and transport failures with
    /// exponential backoff; other non-200 statuses fail immediately.
    #[instrument(skip(self), fields(url = %url))]
    async fn execute_with_retry(&self, url: String, max_retries: u32) -> Result<HttpResponse> {
        let mut attempt = 0;

        loop {
            let request = HttpRequest::new(HttpMethod::Get, url.clone())
                .header("Authorization", self.auth_header())
                .header("Accept", "application/json")
                .timeout(std::time::Duration::from_secs(30));

            match self.http_client.execute(request).await {
                Ok(response) => {
                    let status = response.status;

                    if status == 200 {
                        debug!("API request succeeded: status={}", status);
                        return Ok(response);
                    } else if status == 429 || (500..600).contains(&status) {
                        attempt += 1;
                        if attempt >= max_retries {
                            warn!(
                                "API request failed after {} attempts: status={}",
                                max_retries, status
                            );
                            return Err(CloudinaryError::ApiError {
                                status_code: status,
                                message: format!("Request failed after {} retries", max_retries),
                            }
                            .into());
                        }

                        let backoff_ms = 100u64 * 2u64.pow(attempt);
                        warn!(
                            "API request failed (attempt {}/{}): status={}, retrying in {}ms",
                            attempt, max_retries, status, backoff_ms
                        );
                        tokio::time::sleep(tokio::time::Duration::from_millis(backoff_ms)).await;
                    } else {
                        warn!("API request failed: status={}", status);
                        return Err(CloudinaryError::ApiError {
                            status_code: status,
                            message: String::from_utf8_lossy(&response.body).to_string(),
                        }
                        .into());
                    }
                }
                Err(e) => {
                    attempt += 1;
                    if attempt >= max_retries {
                        warn!("API request failed after {} attempts: {}", max_retries, e);
                        return Err(e);
                    }

                    let backoff_ms = 100u64 * 2u64.pow(attempt);
                    warn!(
                        "API request failed (attempt {}/{}): {}, retrying in {}ms",
                        attempt, max_retries, e, backoff_ms
                    );
                    tokio::time::sleep(tokio::time::Duration::from_millis(backoff_ms)).await;
                }
            }
        }
    }
}

#[async_trait]
impl AssetStore for CloudinaryConnector {
    #[instrument(skip(self), fields(prefix = %prefix))]
    async fn list_page(
        &self,
        prefix: &str,
        page_size: u32,
        cursor: Option<String>,
    ) -> Result<AssetPage> {
        if !self.config.is_configured() {
            warn!("Cloudinary credentials missing; listing unavailable");
            return Err(CloudinaryError::MissingCredentials.into());
        }

        let mut url = format!(
            "{}/{}/resources/image/upload?prefix={}&max_results={}",
            API_BASE,
            self.config.cloud_name,
            urlencoding::encode(prefix),
            page_size.min(MAX_PAGE_SIZE),
        );

        if let Some(token) = cursor {
            url.push_str(&format!("&next_cursor={}", urlencoding::encode(&token)));
        }

        let response = self.execute_with_retry(url, 3).await?;

        let listing: ResourceListResponse = serde_json::from_slice(&response.body)
            .map_err(|e| CloudinaryError::ParseError(format!("resource listing: {}", e)))?;

        let items: Vec<StoreItem> = listing
            .resources
            .into_iter()
            .map(Self::convert_resource)
            .collect();

        info!("Listed {} resources under prefix {}", items.len(), prefix);

        Ok(AssetPage {
            items,
            next_cursor: listing.next_cursor,
        })
    }
}
