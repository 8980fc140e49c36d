//! Initial `sort_order` assignment for a population of items.
//!
//! The backfill orders every non-deleted item of one kind by creation time
//! (ties broken by id) and numbers them `0..N-1`. Planning is pure so the
//! binary can log or dry-run the assignment before writing it.

use crate::error::CoreError;
use crate::types::{DbId, SortOrder, Timestamp};

/// Minimal view of an item needed to plan its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackfillCandidate {
    pub id: DbId,
    pub created_at: Timestamp,
}

/// A planned `sort_order` write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortAssignment {
    pub id: DbId,
    pub sort_order: SortOrder,
}

/// Assign `sort_order = index` in ascending `(created_at, id)` order.
///
/// Input order does not matter. Fails with [`CoreError::Validation`] if the
/// population is too large to number within [`SortOrder`].
pub fn plan_backfill(candidates: &[BackfillCandidate]) -> Result<Vec<SortAssignment>, CoreError> {
    if candidates.len() > SortOrder::MAX as usize {
        return Err(CoreError::Validation(format!(
            "population of {} items exceeds the sort_order range",
            candidates.len()
        )));
    }

    let mut ordered = candidates.to_vec();
    ordered.sort_by_key(|c| (c.created_at, c.id));

    Ok(ordered
        .iter()
        .zip(0..)
        .map(|(c, sort_order)| SortAssignment {
            id: c.id,
            sort_order,
        })
        .collect())
}
