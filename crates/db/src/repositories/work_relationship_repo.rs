//! Repository for the `work_relationships` table.

use gallery_core::types::DbId;
use sqlx::PgPool;

use crate::models::work_relationship::{
    CreateWorkRelationship, WorkRelationship, DEFAULT_RELATIONSHIP_TYPE,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "wr.id, wr.artwork_id, wr.tattoo_id, wr.relationship_type, wr.created_at";

/// Joins that hide links whose artwork or tattoo has been soft-deleted.
const LIVE_JOINS: &str = "JOIN artwork a ON a.id = wr.artwork_id AND a.deleted_at IS NULL \
     JOIN tattoos t ON t.id = wr.tattoo_id AND t.deleted_at IS NULL";

/// Provides CRUD operations for artwork/tattoo links.
pub struct WorkRelationshipRepo;

impl WorkRelationshipRepo {
    /// Insert a new link, returning the created row.
    ///
    /// Existence of both sides is checked by the caller; a duplicate
    /// `(artwork, tattoo, type)` triple violates `uq_work_relationships_pair`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateWorkRelationship,
    ) -> Result<WorkRelationship, sqlx::Error> {
        let relationship_type = input
            .relationship_type
            .as_deref()
            .unwrap_or(DEFAULT_RELATIONSHIP_TYPE);
        sqlx::query_as::<_, WorkRelationship>(
            "INSERT INTO work_relationships (artwork_id, tattoo_id, relationship_type) \
             VALUES ($1, $2, $3) \
             RETURNING id, artwork_id, tattoo_id, relationship_type, created_at",
        )
        .bind(input.artwork_id)
        .bind(input.tattoo_id)
        .bind(relationship_type)
        .fetch_one(pool)
        .await
    }

    /// List live links for an artwork, oldest first.
    pub async fn list_for_artwork(
        pool: &PgPool,
        artwork_id: DbId,
    ) -> Result<Vec<WorkRelationship>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM work_relationships wr {LIVE_JOINS} \
             WHERE wr.artwork_id = $1 \
             ORDER BY wr.created_at, wr.id"
        );
        sqlx::query_as::<_, WorkRelationship>(&query)
            .bind(artwork_id)
            .fetch_all(pool)
            .await
    }

    /// List live links for a tattoo, oldest first.
    pub async fn list_for_tattoo(
        pool: &PgPool,
        tattoo_id: DbId,
    ) -> Result<Vec<WorkRelationship>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM work_relationships wr {LIVE_JOINS} \
             WHERE wr.tattoo_id = $1 \
             ORDER BY wr.created_at, wr.id"
        );
        sqlx::query_as::<_, WorkRelationship>(&query)
            .bind(tattoo_id)
            .fetch_all(pool)
            .await
    }

    /// Permanently remove a link. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM work_relationships WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
