//! Artwork entity model and DTOs.

use gallery_core::types::{DbId, Timestamp};
use gallery_core::work::WorkKind;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::work::WorkRow;

/// A row from the `artwork` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artwork {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub medium: Option<String>,
    pub dimensions: Option<String>,
    pub year: Option<i32>,
    pub price_cents: Option<i64>,
    pub image_url: Option<String>,
    pub drive_file_id: Option<String>,
    pub metadata: serde_json::Value,
    pub is_published: bool,
    pub sort_order: i32,
    pub version: i32,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl WorkRow for Artwork {
    const KIND: WorkKind = WorkKind::Artwork;
    const COLUMNS: &'static str =
        "id, title, slug, description, medium, dimensions, year, price_cents, image_url, \
         drive_file_id, metadata, is_published, sort_order, version, deleted_at, created_at, \
         updated_at";

    fn id(&self) -> DbId {
        self.id
    }

    fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }
}

/// DTO for creating a new artwork.
///
/// `slug` is derived from `title` when absent. `sort_order` defaults to
/// one past the current maximum so new pieces land at the end.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateArtwork {
    pub title: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub medium: Option<String>,
    pub dimensions: Option<String>,
    pub year: Option<i32>,
    pub price_cents: Option<i64>,
    pub image_url: Option<String>,
    pub drive_file_id: Option<String>,
    pub is_published: Option<bool>,
    pub sort_order: Option<i32>,
}

/// DTO for updating an artwork. All fields optional.
///
/// Position is not editable here; it changes only through reorder.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateArtwork {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub medium: Option<String>,
    pub dimensions: Option<String>,
    pub year: Option<i32>,
    pub price_cents: Option<i64>,
    pub image_url: Option<String>,
    pub is_published: Option<bool>,
}
