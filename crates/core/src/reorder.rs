//! Batch reorder payload validation.
//!
//! The reorder endpoint receives `{ "updates": [{ "id", "sort_order",
//! "version"? }, ...] }`. The body is taken as raw JSON and checked here
//! element by element, so that every shape violation is reported as a
//! validation error before anything touches the database.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::Value;

use crate::error::CoreError;
use crate::types::{DbId, RowVersion, SortOrder};

/// Maximum number of entries accepted in one reorder batch.
pub const MAX_REORDER_BATCH: usize = 1000;

/// One validated `(id, sort_order)` assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReorderEntry {
    pub id: DbId,
    pub sort_order: SortOrder,
    /// Row version the client last saw. When present, the update only
    /// applies if the row is still at this version.
    pub version: Option<RowVersion>,
}

/// Parse and validate a reorder request body.
///
/// Rejects:
/// - a body that is not an object, or whose `updates` is missing or not an array
/// - elements that are not objects
/// - `id` values that are not integers
/// - `sort_order` / `version` values that are not integers in `i32` range
/// - duplicate ids within the batch
/// - batches larger than [`MAX_REORDER_BATCH`]
///
/// An empty `updates` array is valid and yields no entries.
pub fn parse_reorder_updates(body: &Value) -> Result<Vec<ReorderEntry>, CoreError> {
    let updates = body
        .get("updates")
        .ok_or_else(|| CoreError::Validation("request body must contain 'updates'".into()))?;

    let items = updates
        .as_array()
        .ok_or_else(|| CoreError::Validation("'updates' must be an array".into()))?;

    if items.len() > MAX_REORDER_BATCH {
        return Err(CoreError::Validation(format!(
            "'updates' may contain at most {MAX_REORDER_BATCH} entries, got {}",
            items.len()
        )));
    }

    let mut seen = HashSet::with_capacity(items.len());
    let mut entries = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let entry = parse_entry(index, item)?;
        if !seen.insert(entry.id) {
            return Err(CoreError::Validation(format!(
                "updates[{index}]: duplicate id {}",
                entry.id
            )));
        }
        entries.push(entry);
    }

    Ok(entries)
}

fn parse_entry(index: usize, item: &Value) -> Result<ReorderEntry, CoreError> {
    let obj = item
        .as_object()
        .ok_or_else(|| CoreError::Validation(format!("updates[{index}] must be an object")))?;

    let id = obj.get("id").and_then(Value::as_i64).ok_or_else(|| {
        CoreError::Validation(format!("updates[{index}].id must be an integer"))
    })?;

    let sort_order = obj
        .get("sort_order")
        .and_then(as_i32)
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "updates[{index}].sort_order must be a 32-bit integer"
            ))
        })?;

    let version = match obj.get("version") {
        None | Some(Value::Null) => None,
        Some(v) => Some(as_i32(v).ok_or_else(|| {
            CoreError::Validation(format!("updates[{index}].version must be a 32-bit integer"))
        })?),
    };

    Ok(ReorderEntry {
        id,
        sort_order,
        version,
    })
}

fn as_i32(value: &Value) -> Option<i32> {
    value.as_i64().and_then(|n| i32::try_from(n).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn accepts_well_formed_batch() {
        let body = json!({ "updates": [
            { "id": 1, "sort_order": 5 },
            { "id": 2, "sort_order": 3, "version": 4 },
        ]});
        let entries = parse_reorder_updates(&body).unwrap();
        assert_eq!(
            entries,
            vec![
                ReorderEntry { id: 1, sort_order: 5, version: None },
                ReorderEntry { id: 2, sort_order: 3, version: Some(4) },
            ]
        );
    }

    #[test]
    fn empty_batch_is_valid() {
        let entries = parse_reorder_updates(&json!({ "updates": [] })).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn rejects_single_object_instead_of_array() {
        let body = json!({ "updates": { "id": 1, "sort_order": 2 } });
        assert_matches!(parse_reorder_updates(&body), Err(CoreError::Validation(_)));
    }

    #[test]
    fn rejects_missing_updates_key() {
        assert_matches!(
            parse_reorder_updates(&json!([{ "id": 1, "sort_order": 2 }])),
            Err(CoreError::Validation(_))
        );
        assert_matches!(parse_reorder_updates(&json!({})), Err(CoreError::Validation(_)));
    }

    #[test]
    fn rejects_string_sort_order() {
        let body = json!({ "updates": [{ "id": 1, "sort_order": "a" }] });
        assert_matches!(parse_reorder_updates(&body), Err(CoreError::Validation(_)));
    }

    #[test]
    fn rejects_fractional_and_out_of_range_values() {
        let fractional = json!({ "updates": [{ "id": 1.5, "sort_order": 1 }] });
        assert_matches!(parse_reorder_updates(&fractional), Err(CoreError::Validation(_)));

        let too_big = json!({ "updates": [{ "id": 1, "sort_order": 5_000_000_000_i64 }] });
        assert_matches!(parse_reorder_updates(&too_big), Err(CoreError::Validation(_)));
    }

    #[test]
    fn rejects_non_object_element() {
        let body = json!({ "updates": [7] });
        assert_matches!(parse_reorder_updates(&body), Err(CoreError::Validation(_)));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let body = json!({ "updates": [
            { "id": 1, "sort_order": 0 },
            { "id": 1, "sort_order": 1 },
        ]});
        assert_matches!(
            parse_reorder_updates(&body),
            Err(CoreError::Validation(msg)) if msg.contains("duplicate id 1")
        );
    }

    #[test]
    fn rejects_bad_version_type() {
        let body = json!({ "updates": [{ "id": 1, "sort_order": 0, "version": "v2" }] });
        assert_matches!(parse_reorder_updates(&body), Err(CoreError::Validation(_)));
    }

    #[test]
    fn null_version_means_unversioned() {
        let body = json!({ "updates": [{ "id": 9, "sort_order": 0, "version": null }] });
        assert_eq!(parse_reorder_updates(&body).unwrap()[0].version, None);
    }

    #[test]
    fn rejects_oversized_batch() {
        let updates: Vec<_> = (0..=MAX_REORDER_BATCH as i64)
            .map(|i| json!({ "id": i, "sort_order": i }))
            .collect();
        let body = json!({ "updates": updates });
        assert_matches!(parse_reorder_updates(&body), Err(CoreError::Validation(_)));
    }
}
