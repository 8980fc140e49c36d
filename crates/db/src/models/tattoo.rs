//! Tattoo entity model and DTOs.

use gallery_core::types::{DbId, Timestamp};
use gallery_core::work::WorkKind;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::work::WorkRow;

/// A row from the `tattoos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tattoo {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub style: Option<String>,
    pub placement: Option<String>,
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

impl WorkRow for Tattoo {
    const KIND: WorkKind = WorkKind::Tattoos;
    const COLUMNS: &'static str =
        "id, title, slug, description, style, placement, image_url, drive_file_id, metadata, \
         is_published, sort_order, version, deleted_at, created_at, updated_at";

    fn id(&self) -> DbId {
        self.id
    }

    fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }
}

/// DTO for creating a new tattoo.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTattoo {
    pub title: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub style: Option<String>,
    pub placement: Option<String>,
    pub image_url: Option<String>,
    pub drive_file_id: Option<String>,
    pub is_published: Option<bool>,
    pub sort_order: Option<i32>,
}

/// DTO for updating a tattoo. All fields optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTattoo {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub style: Option<String>,
    pub placement: Option<String>,
    pub image_url: Option<String>,
    pub is_published: Option<bool>,
}
