//! Trash purge endpoint.

use serde::Serialize;

use super::http;
use crate::core::ApiError;
use crate::models::PurgeItem;

#[derive(Serialize)]
struct PurgePayload<'a> {
    items: &'a [PurgeItem],
}

/// Permanently delete trash entries in one batch.
pub async fn purge(items: &[PurgeItem]) -> Result<(), ApiError> {
    http::delete_json("/api/trash/items", &PurgePayload { items }).await
}
