//! Asset endpoints: sync + categories, category lookup, search, listing
//!
//! All endpoints are parameterized by asset kind (`templates`,
//! `stickers`); an unknown kind answers a 404 envelope. Success bodies
//! are `{ "success": true, ... }` envelopes mirroring the catalog's read
//! projections.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use core_catalog::{AssetRecord, CatalogError, CategoryGroup, SearchFilter};

use crate::error::{Result, ServerError};
use crate::state::{AppState, AssetService};

// ============================================================================
// Response views
// ============================================================================

/// Categories listing projection: name, category, image URL
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSummaryView {
    name: String,
    category: String,
    image_url: String,
}

impl From<&AssetRecord> for AssetSummaryView {
    fn from(record: &AssetRecord) -> Self {
        Self {
            name: record.name.clone(),
            category: record.category.clone(),
            image_url: record.image_url.clone(),
        }
    }
}

/// Category lookup projection: the category itself is echoed at the
/// response top level, not repeated per record
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetCardView {
    name: String,
    image_url: String,
    width: Option<i64>,
    height: Option<i64>,
    format: Option<String>,
}

impl From<&AssetRecord> for AssetCardView {
    fn from(record: &AssetRecord) -> Self {
        Self {
            name: record.name.clone(),
            image_url: record.image_url.clone(),
            width: record.width,
            height: record.height,
            format: record.format.clone(),
        }
    }
}

/// Search/listing projection
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDetailView {
    name: String,
    category: String,
    image_url: String,
    width: Option<i64>,
    height: Option<i64>,
    format: Option<String>,
}

impl From<&AssetRecord> for AssetDetailView {
    fn from(record: &AssetRecord) -> Self {
        Self {
            name: record.name.clone(),
            category: record.category.clone(),
            image_url: record.image_url.clone(),
            width: record.width,
            height: record.height,
            format: record.format.clone(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryView {
    name: String,
    url_name: String,
    assets: Vec<AssetSummaryView>,
}

impl From<&CategoryGroup> for CategoryView {
    fn from(group: &CategoryGroup) -> Self {
        Self {
            name: group.name.clone(),
            url_name: group.url_name.clone(),
            assets: group.assets.iter().map(AssetSummaryView::from).collect(),
        }
    }
}

// ============================================================================
// GET /api/:kind/categories
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriesResponse {
    success: bool,
    total_categories: usize,
    total_images: usize,
    /// Set when the sync walk ended early; the grouping then reflects a
    /// partial, possibly stale mirror
    truncated: bool,
    categories: Vec<CategoryView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// Sync the remote store for this kind, then return the mirrored set
/// grouped by category.
pub async fn categories(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
) -> Result<Json<CategoriesResponse>> {
    let service = lookup(&state, &kind)?;

    let (groups, report) = service.engine.sync_and_group().await?;

    let total_images: usize = groups.iter().map(|g| g.assets.len()).sum();
    let message = if report.discovered == 0 {
        Some(format!(
            "No {} fetched from the remote store. Check credentials or folder name.",
            kind
        ))
    } else {
        None
    };

    info!(
        kind = %kind,
        categories = groups.len(),
        images = total_images,
        truncated = report.truncated,
        "Categories request served"
    );

    Ok(Json(CategoriesResponse {
        success: true,
        total_categories: groups.len(),
        total_images,
        truncated: report.truncated,
        categories: groups.iter().map(CategoryView::from).collect(),
        message,
    }))
}

// ============================================================================
// POST /api/:kind/category
// ============================================================================

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequest {
    #[serde(default)]
    category_name: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    success: bool,
    category: String,
    count: usize,
    assets: Vec<AssetCardView>,
}

/// Records for one category, addressed by URL-safe display name in the
/// payload. Missing name is a validation error; an unknown category is
/// an explicit 404, distinct from a valid empty result.
pub async fn by_category(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
    body: Option<Json<CategoryRequest>>,
) -> Result<Json<CategoryResponse>> {
    let service = lookup(&state, &kind)?;

    let name = body
        .and_then(|Json(request)| request.category_name)
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| ServerError::bad_request("categoryName is required in payload"))?;

    let (category, records) =
        service
            .query
            .by_category(name.trim())
            .await
            .map_err(|e| match e {
                CatalogError::NotFound { id, .. } => {
                    ServerError::not_found(format!("No {} found in category \"{}\"", kind, id))
                }
                other => ServerError::Catalog(other),
            })?;

    Ok(Json(CategoryResponse {
        success: true,
        category,
        count: records.len(),
        assets: records.iter().map(AssetCardView::from).collect(),
    }))
}

// ============================================================================
// GET /api/:kind/search
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    success: bool,
    filters: SearchParams,
    count: usize,
    assets: Vec<AssetDetailView>,
}

fn parse_dimension(field: &str, value: &Option<String>) -> Result<Option<i64>> {
    match value {
        None => Ok(None),
        Some(raw) => raw.trim().parse::<i64>().map(Some).map_err(|_| {
            ServerError::bad_request(format!("{} must be an integer, got \"{}\"", field, raw))
        }),
    }
}

/// Conjunctive filtered search over the mirror. A pure read; never
/// triggers synchronization.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>> {
    let service = lookup(&state, &kind)?;

    let filter = SearchFilter {
        category: params.category.clone(),
        format: params.format.as_ref().map(|f| f.to_lowercase()),
        min_width: parse_dimension("minWidth", &params.min_width)?,
        min_height: parse_dimension("minHeight", &params.min_height)?,
        tags: params
            .tags
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect(),
    };

    let records = service.query.search(&filter).await?;

    Ok(Json(SearchResponse {
        success: true,
        filters: params,
        count: records.len(),
        assets: records.iter().map(AssetDetailView::from).collect(),
    }))
}

// ============================================================================
// GET /api/:kind/all
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAllResponse {
    success: bool,
    count: usize,
    assets: Vec<AssetDetailView>,
}

/// All mirrored records for this kind. A pure read.
pub async fn all(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
) -> Result<Json<ListAllResponse>> {
    let service = lookup(&state, &kind)?;

    let records = service.query.list_all().await?;

    Ok(Json(ListAllResponse {
        success: true,
        count: records.len(),
        assets: records.iter().map(AssetDetailView::from).collect(),
    }))
}

fn lookup<'a>(state: &'a AppState, kind: &str) -> Result<&'a AssetService> {
    state
        .service(kind)
        .ok_or_else(|| ServerError::UnknownKind(kind.to_string()))
}
