//! Read, soft-delete and metadata queries shared by `artwork` and `tattoos`.
//!
//! Every read here filters `deleted_at IS NULL`; a soft-deleted row is
//! invisible to lookups, listings and search regardless of its position.

use gallery_core::search::{
    build_prefix_tsquery, clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, DEFAULT_SEARCH_LIMIT,
    MAX_LIST_LIMIT, MAX_SEARCH_LIMIT,
};
use gallery_core::types::DbId;
use gallery_core::work::WorkKind;
use sqlx::PgPool;

use crate::models::work::{ListWorksParams, SearchWorksParams, WorkRow};

/// Provides lookups and lifecycle operations for any [`WorkRow`] type.
pub struct WorkRepo;

impl WorkRepo {
    /// Find a live row by its internal ID.
    pub async fn find_by_id<T: WorkRow>(pool: &PgPool, id: DbId) -> Result<Option<T>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM {} WHERE id = $1 AND deleted_at IS NULL",
            T::COLUMNS,
            T::KIND.table()
        );
        sqlx::query_as::<_, T>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a live row by slug, optionally filtered by publication state.
    pub async fn find_by_slug<T: WorkRow>(
        pool: &PgPool,
        slug: &str,
        published: Option<bool>,
    ) -> Result<Option<T>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM {} \
             WHERE slug = $1 AND deleted_at IS NULL \
               AND ($2::BOOLEAN IS NULL OR is_published = $2)",
            T::COLUMNS,
            T::KIND.table()
        );
        sqlx::query_as::<_, T>(&query)
            .bind(slug)
            .bind(published)
            .fetch_optional(pool)
            .await
    }

    /// List live rows in display order (`sort_order`, then `id`).
    pub async fn list<T: WorkRow>(
        pool: &PgPool,
        params: &ListWorksParams,
    ) -> Result<Vec<T>, sqlx::Error> {
        let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
        let offset = clamp_offset(params.offset);
        let query = format!(
            "SELECT {} FROM {} \
             WHERE deleted_at IS NULL \
               AND ($1::BOOLEAN IS NULL OR is_published = $1) \
             ORDER BY sort_order, id \
             LIMIT $2 OFFSET $3",
            T::COLUMNS,
            T::KIND.table()
        );
        sqlx::query_as::<_, T>(&query)
            .bind(params.published)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Full-text search over title, description and the kind-specific
    /// secondary field. The last term is prefix-matched.
    ///
    /// Returns an empty list for blank or unusable queries.
    pub async fn search<T: WorkRow>(
        pool: &PgPool,
        params: &SearchWorksParams,
    ) -> Result<Vec<T>, sqlx::Error> {
        let Some(tsquery) = params.q.as_deref().and_then(build_prefix_tsquery) else {
            return Ok(Vec::new());
        };
        let limit = clamp_limit(params.limit, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT);
        let offset = clamp_offset(params.offset);
        let query = format!(
            "SELECT {} FROM {} \
             WHERE search_vector @@ to_tsquery('english', $1) \
               AND deleted_at IS NULL \
               AND ($2::BOOLEAN IS NULL OR is_published = $2) \
             ORDER BY ts_rank(search_vector, to_tsquery('english', $1)) DESC, sort_order, id \
             LIMIT $3 OFFSET $4",
            T::COLUMNS,
            T::KIND.table()
        );
        sqlx::query_as::<_, T>(&query)
            .bind(&tsquery)
            .bind(params.published)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Soft-delete a row. Returns `true` if a live row was marked deleted.
    ///
    /// Deletion is one-way; there is no restore.
    pub async fn soft_delete(pool: &PgPool, kind: WorkKind, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!(
            "UPDATE {} SET deleted_at = NOW(), version = version + 1 \
             WHERE id = $1 AND deleted_at IS NULL",
            kind.table()
        );
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether `id` names a live row of `kind`.
    pub async fn exists(pool: &PgPool, kind: WorkKind, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!(
            "SELECT EXISTS (SELECT 1 FROM {} WHERE id = $1 AND deleted_at IS NULL)",
            kind.table()
        );
        sqlx::query_scalar::<_, bool>(&query)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Replace the `metadata` JSON of a live row, bumping its version.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn set_metadata<T: WorkRow>(
        pool: &PgPool,
        id: DbId,
        metadata: &serde_json::Value,
    ) -> Result<Option<T>, sqlx::Error> {
        let query = format!(
            "UPDATE {} SET metadata = $2, version = version + 1 \
             WHERE id = $1 AND deleted_at IS NULL \
             RETURNING {}",
            T::KIND.table(),
            T::COLUMNS
        );
        sqlx::query_as::<_, T>(&query)
            .bind(id)
            .bind(metadata)
            .fetch_optional(pool)
            .await
    }

    /// Of the given Drive file ids, return those already attached to a live row.
    pub async fn existing_drive_file_ids(
        pool: &PgPool,
        kind: WorkKind,
        drive_file_ids: &[String],
    ) -> Result<Vec<String>, sqlx::Error> {
        if drive_file_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT drive_file_id FROM {} \
             WHERE deleted_at IS NULL AND drive_file_id = ANY($1)",
            kind.table()
        );
        sqlx::query_scalar::<_, String>(&query)
            .bind(drive_file_ids)
            .fetch_all(pool)
            .await
    }
}
