//! Folder endpoints of the remote document service.

use serde::{Deserialize, Serialize};

use super::{ListResponse, http};
use crate::core::ApiError;
use crate::models::Folder;

#[derive(Serialize)]
struct CreatePayload<'a> {
    name: &'a str,
    description: &'a str,
}

#[derive(Deserialize)]
struct CreateResponse {
    folder: Folder,
}

/// List active folders.
pub async fn list() -> Result<Vec<Folder>, ApiError> {
    let response: ListResponse<Folder> = http::get_json("/api/documents/folders/").await?;
    Ok(response.items)
}

/// Create a folder, returning the server record.
pub async fn create(name: &str, description: &str) -> Result<Folder, ApiError> {
    let response: CreateResponse =
        http::post_json("/api/documents/folders/", &CreatePayload { name, description }).await?;
    Ok(response.folder)
}

/// Soft-delete a folder.
///
/// The current surface never hard-deletes here; permanent removal goes
/// through the trash purge batch.
pub async fn remove(id: i64) -> Result<(), ApiError> {
    http::delete(
        &format!("/api/documents/folders/{id}"),
        &[("hard_delete", "false".to_string())],
    )
    .await
}

/// Undelete a trashed folder.
pub async fn restore(id: i64) -> Result<(), ApiError> {
    http::post_empty(&format!("/api/documents/folders/{id}/restore")).await
}

/// List trashed folders.
pub async fn trash() -> Result<Vec<Folder>, ApiError> {
    let response: ListResponse<Folder> = http::get_json("/api/documents/folders/trash").await?;
    Ok(response.items)
}
