//! Links between an artwork and a tattoo.

use gallery_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Relationship type used when the caller does not specify one.
pub const DEFAULT_RELATIONSHIP_TYPE: &str = "related";

/// A row from the `work_relationships` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkRelationship {
    pub id: DbId,
    pub artwork_id: DbId,
    pub tattoo_id: DbId,
    pub relationship_type: String,
    pub created_at: Timestamp,
}

/// DTO for linking an artwork to a tattoo.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWorkRelationship {
    pub artwork_id: DbId,
    pub tattoo_id: DbId,
    pub relationship_type: Option<String>,
}
