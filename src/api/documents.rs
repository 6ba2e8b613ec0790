//! Document endpoints of the remote document service.

use serde::Serialize;

use super::{ListResponse, http};
use crate::core::ApiError;
use crate::models::Document;

#[derive(Serialize)]
struct MovePayload {
    folder_id: Option<i64>,
}

/// List documents, optionally scoped to a folder. Trashed items are
/// excluded server-side.
pub async fn list(folder_id: Option<i64>) -> Result<Vec<Document>, ApiError> {
    let response: ListResponse<Document> = match folder_id {
        Some(id) => {
            http::get_json_query("/api/documents", &[("folder_id", id.to_string())]).await?
        }
        None => http::get_json("/api/documents").await?,
    };
    Ok(response.items)
}

/// Upload a file as multipart form content.
pub async fn upload(file: &web_sys::File) -> Result<Document, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|e| ApiError::Browser(format!("{e:?}")))?;
    form.append_with_blob("file", file)
        .map_err(|e| ApiError::Browser(format!("{e:?}")))?;
    http::post_form("/api/documents/upload", form).await
}

/// Fetch a document's binary content.
pub async fn download(id: i64) -> Result<Vec<u8>, ApiError> {
    http::get_binary(&format!("/api/documents/{id}/download")).await
}

/// Delete a document, softly unless `hard_delete` is set.
pub async fn remove(id: i64, hard_delete: bool) -> Result<(), ApiError> {
    http::delete(
        &format!("/api/documents/{id}"),
        &[("hard_delete", hard_delete.to_string())],
    )
    .await
}

/// Reassign a document's folder (`None` moves it to the root level).
pub async fn move_to_folder(id: i64, folder_id: Option<i64>) -> Result<(), ApiError> {
    http::post_json_status(&format!("/api/documents/{id}/move"), &MovePayload { folder_id }).await
}

/// Undelete a trashed document.
pub async fn restore(id: i64) -> Result<(), ApiError> {
    http::post_empty(&format!("/api/documents/{id}/restore")).await
}

/// List trashed documents.
///
/// Some legacy trash records still carry an active status string, so
/// every entry is forced to the deleted state here at the boundary.
pub async fn trash() -> Result<Vec<Document>, ApiError> {
    let response: ListResponse<Document> = http::get_json("/api/documents/trash").await?;
    Ok(response.items.into_iter().map(Document::mark_deleted).collect())
}
