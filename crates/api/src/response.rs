//! Shared response envelope types for API handlers.
//!
//! Successful responses use a `{ "data": ... }` envelope. Use
//! [`DataResponse`] instead of ad-hoc `serde_json::json!({ "data": ... })`.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Response body for the batch reorder endpoints.
#[derive(Debug, Serialize)]
pub struct ReorderResponse<T: Serialize> {
    pub success: bool,
    /// Number of rows updated.
    pub updated: usize,
    /// Updated rows, in request order.
    pub data: Vec<T>,
}
