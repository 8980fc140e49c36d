//! Shared contract for orderable portfolio rows and their query DTOs.

use gallery_core::types::DbId;
use gallery_core::work::WorkKind;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::FromRow;

/// A row type backed by one of the orderable work tables.
///
/// Lets the ordering, lookup and soft-delete queries in
/// [`WorkRepo`](crate::repositories::WorkRepo) and
/// [`SortOrderRepo`](crate::repositories::SortOrderRepo) be written once
/// for both artwork and tattoos.
pub trait WorkRow: for<'r> FromRow<'r, PgRow> + Serialize + Send + Sync + Unpin + 'static {
    /// Which population this row belongs to.
    const KIND: WorkKind;
    /// Column list selected and returned by every query on the table.
    const COLUMNS: &'static str;

    fn id(&self) -> DbId;

    fn image_url(&self) -> Option<&str>;
}

/// Query parameters for listing works.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListWorksParams {
    /// `Some(true)` restricts to published rows, `Some(false)` to drafts.
    pub published: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query parameters for slug lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct SlugLookupParams {
    pub slug: String,
    /// When `true`, drafts are treated as not found.
    pub published: Option<bool>,
}

/// Query parameters for full-text search over works.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchWorksParams {
    pub q: Option<String>,
    pub published: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Result of applying a reorder batch.
///
/// Anything other than `Applied` means the transaction was rolled back and
/// no row changed.
#[derive(Debug)]
pub enum ReorderOutcome<T> {
    /// Every entry was applied; rows are returned in request order.
    Applied(Vec<T>),
    /// The id does not name a live row.
    Missing { id: DbId },
    /// The row exists but has moved on since the client read it.
    Stale {
        id: DbId,
        expected: i32,
        current: i32,
    },
}
