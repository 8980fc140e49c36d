//! Repository for the `tattoos` table.

use gallery_core::types::DbId;
use sqlx::PgPool;

use crate::models::tattoo::{CreateTattoo, Tattoo, UpdateTattoo};
use crate::models::work::WorkRow;

/// Provides create and update for tattoos.
pub struct TattooRepo;

impl TattooRepo {
    /// Insert a new tattoo, returning the created row.
    ///
    /// If `sort_order` is `None`, the piece is placed after every live tattoo.
    pub async fn create(pool: &PgPool, input: &CreateTattoo) -> Result<Tattoo, sqlx::Error> {
        let query = format!(
            "INSERT INTO tattoos \
                (title, slug, description, style, placement, image_url, drive_file_id, \
                 is_published, sort_order) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, false), \
                 COALESCE($9, (SELECT COALESCE(MAX(sort_order) + 1, 0) \
                               FROM tattoos WHERE deleted_at IS NULL))) \
             RETURNING {}",
            Tattoo::COLUMNS
        );
        sqlx::query_as::<_, Tattoo>(&query)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(&input.style)
            .bind(&input.placement)
            .bind(&input.image_url)
            .bind(&input.drive_file_id)
            .bind(input.is_published)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Update a tattoo. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTattoo,
    ) -> Result<Option<Tattoo>, sqlx::Error> {
        let query = format!(
            "UPDATE tattoos SET \
                title = COALESCE($2, title), \
                slug = COALESCE($3, slug), \
                description = COALESCE($4, description), \
                style = COALESCE($5, style), \
                placement = COALESCE($6, placement), \
                image_url = COALESCE($7, image_url), \
                is_published = COALESCE($8, is_published), \
                version = version + 1 \
             WHERE id = $1 AND deleted_at IS NULL \
             RETURNING {}",
            Tattoo::COLUMNS
        );
        sqlx::query_as::<_, Tattoo>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(&input.style)
            .bind(&input.placement)
            .bind(&input.image_url)
            .bind(input.is_published)
            .fetch_optional(pool)
            .await
    }
}
