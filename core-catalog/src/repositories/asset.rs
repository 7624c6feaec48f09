//! Asset repository trait and implementation

use crate::error::{CatalogError, Result};
use crate::models::{AssetRecord, AssetUpsert, SearchFilter};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

/// Asset repository interface for data access operations
///
/// Every implementation is scoped to a single asset kind; `name` is
/// unique within that scope.
#[async_trait]
pub trait AssetRepository: Send + Sync {
    /// Insert-or-update a batch of derived asset records by natural key.
    ///
    /// Semantics per key: if absent, insert with empty tags; if present,
    /// overwrite the derived fields (`category`, `image_url`, `width`,
    /// `height`, `format`) and refresh `updated_at`, leaving `tags` and
    /// `created_at` untouched.
    ///
    /// The whole batch commits as one operation. An empty batch is a
    /// no-op and must not touch storage.
    ///
    /// # Returns
    /// Number of rows committed
    async fn bulk_upsert(&self, records: &[AssetUpsert]) -> Result<u64>;

    /// Read all records for this kind
    async fn find_all(&self) -> Result<Vec<AssetRecord>>;

    /// Read records with an exact category match
    async fn find_by_category(&self, category: &str) -> Result<Vec<AssetRecord>>;

    /// Read records matching a conjunctive filter
    async fn search(&self, filter: &SearchFilter) -> Result<Vec<AssetRecord>>;

    /// Count records for this kind
    async fn count(&self) -> Result<i64>;
}

/// Internal row shape; `tags` is stored as a JSON array in a TEXT column.
#[derive(FromRow)]
struct AssetRow {
    name: String,
    category: String,
    image_url: String,
    tags: String,
    width: Option<i64>,
    height: Option<i64>,
    format: Option<String>,
    created_at: i64,
    updated_at: i64,
}

impl AssetRow {
    fn into_record(self) -> AssetRecord {
        AssetRecord {
            name: self.name,
            category: self.category,
            image_url: self.image_url,
            tags: serde_json::from_str(&self.tags).unwrap_or_default(),
            width: self.width,
            height: self.height,
            format: self.format,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

const SELECT_COLUMNS: &str =
    "name, category, image_url, tags, width, height, format, created_at, updated_at";

/// SQLite implementation of AssetRepository, scoped to one asset kind
pub struct SqliteAssetRepository {
    pool: SqlitePool,
    kind: String,
}

impl SqliteAssetRepository {
    /// Create a repository handle for one asset kind
    pub fn new(pool: SqlitePool, kind: impl Into<String>) -> Self {
        Self {
            pool,
            kind: kind.into(),
        }
    }

    /// Asset kind this handle is scoped to
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

#[async_trait]
impl AssetRepository for SqliteAssetRepository {
    async fn bulk_upsert(&self, records: &[AssetUpsert]) -> Result<u64> {
        if records.is_empty() {
            return Ok(0);
        }

        for record in records {
            record.validate().map_err(|msg| CatalogError::InvalidInput {
                field: "asset".to_string(),
                message: msg,
            })?;
        }

        let now = Utc::now().timestamp();
        let mut tx = self.pool.begin().await?;
        let mut committed = 0u64;

        for record in records {
            let result = sqlx::query(
                r#"
                INSERT INTO assets (
                    kind, name, category, image_url, tags,
                    width, height, format, created_at, updated_at
                ) VALUES (?, ?, ?, ?, '[]', ?, ?, ?, ?, ?)
                ON CONFLICT(kind, name) DO UPDATE SET
                    category = excluded.category,
                    image_url = excluded.image_url,
                    width = excluded.width,
                    height = excluded.height,
                    format = excluded.format,
                    updated_at = excluded.updated_at
                "#,
            )
            .bind(&self.kind)
            .bind(&record.name)
            .bind(&record.category)
            .bind(&record.image_url)
            .bind(record.width)
            .bind(record.height)
            .bind(&record.format)
            .bind(now)
            .bind(now)
            .execute(&mut *tx)
            .await?;

            committed += result.rows_affected();
        }

        tx.commit().await?;

        Ok(committed)
    }

    async fn find_all(&self) -> Result<Vec<AssetRecord>> {
        let rows = sqlx::query_as::<_, AssetRow>(&format!(
            "SELECT {} FROM assets WHERE kind = ? ORDER BY category, name",
            SELECT_COLUMNS
        ))
        .bind(&self.kind)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(AssetRow::into_record).collect())
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<AssetRecord>> {
        let rows = sqlx::query_as::<_, AssetRow>(&format!(
            "SELECT {} FROM assets WHERE kind = ? AND category = ? ORDER BY name",
            SELECT_COLUMNS
        ))
        .bind(&self.kind)
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(AssetRow::into_record).collect())
    }

    async fn search(&self, filter: &SearchFilter) -> Result<Vec<AssetRecord>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT {} FROM assets WHERE kind = ",
            SELECT_COLUMNS
        ));
        builder.push_bind(&self.kind);

        if let Some(category) = &filter.category {
            builder.push(" AND category = ");
            builder.push_bind(category);
        }

        if let Some(format) = &filter.format {
            builder.push(" AND LOWER(format) = ");
            builder.push_bind(format.to_lowercase());
        }

        if let Some(min_width) = filter.min_width {
            builder.push(" AND width >= ");
            builder.push_bind(min_width);
        }

        if let Some(min_height) = filter.min_height {
            builder.push(" AND height >= ");
            builder.push_bind(min_height);
        }

        // Tag superset: every requested tag must appear in the record's
        // JSON tags array.
        for tag in &filter.tags {
            builder.push(" AND EXISTS (SELECT 1 FROM json_each(assets.tags) WHERE json_each.value = ");
            builder.push_bind(tag);
            builder.push(")");
        }

        builder.push(" ORDER BY name");

        let rows: Vec<AssetRow> = builder.build_query_as().fetch_all(&self.pool).await?;

        Ok(rows.into_iter().map(AssetRow::into_record).collect())
    }

    async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM assets WHERE kind = ?")
            .bind(&self.kind)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
