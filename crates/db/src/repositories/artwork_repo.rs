//! Repository for the `artwork` table.
//!
//! Reads, ordering and soft delete are shared with tattoos and live in
//! [`WorkRepo`](super::WorkRepo) / [`SortOrderRepo`](super::SortOrderRepo).

use gallery_core::types::DbId;
use sqlx::PgPool;

use crate::models::artwork::{Artwork, CreateArtwork, UpdateArtwork};
use crate::models::work::WorkRow;

/// Provides create and update for artwork.
pub struct ArtworkRepo;

impl ArtworkRepo {
    /// Insert a new artwork, returning the created row.
    ///
    /// The caller resolves `input.slug` beforehand. If `sort_order` is
    /// `None`, the piece is placed after every live artwork.
    pub async fn create(pool: &PgPool, input: &CreateArtwork) -> Result<Artwork, sqlx::Error> {
        let query = format!(
            "INSERT INTO artwork \
                (title, slug, description, medium, dimensions, year, price_cents, \
                 image_url, drive_file_id, is_published, sort_order) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, COALESCE($10, false), \
                 COALESCE($11, (SELECT COALESCE(MAX(sort_order) + 1, 0) \
                                FROM artwork WHERE deleted_at IS NULL))) \
             RETURNING {}",
            Artwork::COLUMNS
        );
        sqlx::query_as::<_, Artwork>(&query)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(&input.medium)
            .bind(&input.dimensions)
            .bind(input.year)
            .bind(input.price_cents)
            .bind(&input.image_url)
            .bind(&input.drive_file_id)
            .bind(input.is_published)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Update an artwork. Only non-`None` fields are applied; the version
    /// is bumped on every successful update.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateArtwork,
    ) -> Result<Option<Artwork>, sqlx::Error> {
        let query = format!(
            "UPDATE artwork SET \
                title = COALESCE($2, title), \
                slug = COALESCE($3, slug), \
                description = COALESCE($4, description), \
                medium = COALESCE($5, medium), \
                dimensions = COALESCE($6, dimensions), \
                year = COALESCE($7, year), \
                price_cents = COALESCE($8, price_cents), \
                image_url = COALESCE($9, image_url), \
                is_published = COALESCE($10, is_published), \
                version = version + 1 \
             WHERE id = $1 AND deleted_at IS NULL \
             RETURNING {}",
            Artwork::COLUMNS
        );
        sqlx::query_as::<_, Artwork>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(&input.medium)
            .bind(&input.dimensions)
            .bind(input.year)
            .bind(input.price_cents)
            .bind(&input.image_url)
            .bind(input.is_published)
            .fetch_optional(pool)
            .await
    }
}
