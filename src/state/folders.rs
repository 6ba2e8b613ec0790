//! Folder view-model.
//!
//! Owns the folder list and composes with [`DocumentState`] to produce
//! the unified folder+file listing. The multi-step workflows here
//! (create-then-attach, upload-then-move) are explicitly two-phase:
//! their outcomes distinguish full success, success with a failed second
//! step, and failure before any effect.

use leptos::prelude::*;

use super::documents::DocumentState;
use crate::api;
use crate::core::listing;
use crate::core::ApiError;
use crate::models::{Folder, ListingRow};

/// Outcome of [`FolderState::create_folder`].
///
/// A failure in the attach step must not roll back folder creation; the
/// folder persists and the caller reports the weaker failure distinctly.
#[derive(Debug)]
pub enum CreateFolderOutcome {
    /// Folder created; any staged file attached.
    Created { folder_id: i64 },
    /// Folder created, but uploading or moving the staged file failed.
    CreatedAttachFailed { folder_id: i64, error: ApiError },
    /// Nothing was created.
    Failed(ApiError),
}

/// Outcome of [`FolderState::move_file_to_folder`].
#[derive(Debug)]
pub enum MoveOutcome {
    Moved { document_id: i64 },
    /// The upload succeeded but the move did not: the document now exists
    /// unfoldered (at-least-once upload, best-effort move).
    UploadedUnfiled { document_id: i64, error: ApiError },
    Failed(ApiError),
}

/// Reactive state for the folder portion of the documents view.
#[derive(Clone)]
pub struct FolderState {
    pub folders: RwSignal<Vec<Folder>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl FolderState {
    pub fn new() -> Self {
        Self {
            folders: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Replace the local folder list; empty on failure.
    pub async fn fetch_folders(&self) {
        self.loading.set(true);
        match api::folders::list().await {
            Ok(mut items) => {
                items.retain(|folder| !folder.is_trashed());
                self.folders.set(items);
                self.error.set(None);
            }
            Err(err) => {
                self.folders.set(Vec::new());
                self.error.set(Some(format!("Failed to load folders: {err}")));
            }
        }
        self.loading.set(false);
    }

    /// Create a folder and, if a file was staged, attach it as a
    /// follow-up step. Both the folder list and the document scope are
    /// refreshed afterwards regardless of the attach outcome.
    pub async fn create_folder(
        &self,
        docs: &DocumentState,
        name: &str,
        description: &str,
        attachment: Option<web_sys::File>,
    ) -> CreateFolderOutcome {
        let folder = match api::folders::create(name.trim(), description).await {
            Ok(folder) => folder,
            Err(err) => {
                self.error.set(Some(format!("Unable to create folder: {err}")));
                return CreateFolderOutcome::Failed(err);
            }
        };

        let outcome = match attachment {
            None => CreateFolderOutcome::Created { folder_id: folder.id },
            Some(file) => match upload_then_move(&file, folder.id).await {
                MoveOutcome::Moved { .. } => CreateFolderOutcome::Created { folder_id: folder.id },
                MoveOutcome::UploadedUnfiled { error, .. } | MoveOutcome::Failed(error) => {
                    self.error
                        .set(Some(format!("Folder created, but attaching the file failed: {error}")));
                    CreateFolderOutcome::CreatedAttachFailed {
                        folder_id: folder.id,
                        error,
                    }
                }
            },
        };

        self.fetch_folders().await;
        let scope = docs.scope.get_untracked();
        docs.fetch_by_folder(scope).await;
        outcome
    }

    /// Upload a file and file it into `folder_id` as a two-step sequence.
    pub async fn move_file_to_folder(
        &self,
        docs: &DocumentState,
        file: web_sys::File,
        folder_id: i64,
    ) -> MoveOutcome {
        let outcome = upload_then_move(&file, folder_id).await;
        match &outcome {
            MoveOutcome::Moved { .. } => self.error.set(None),
            MoveOutcome::UploadedUnfiled { error, .. } => self.error.set(Some(format!(
                "Uploaded, but filing into the folder failed: {error}"
            ))),
            MoveOutcome::Failed(error) => {
                self.error.set(Some(format!("Upload failed: {error}")));
            }
        }
        let scope = docs.scope.get_untracked();
        docs.fetch_by_folder(scope).await;
        self.fetch_folders().await;
        outcome
    }

    /// Soft-delete a folder and drop it from the local list.
    pub async fn delete_folder(&self, folder: &Folder) {
        match api::folders::remove(folder.id).await {
            Ok(()) => {
                let id = folder.id;
                self.folders.update(|list| list.retain(|f| f.id != id));
                self.error.set(None);
            }
            Err(err) => self.error.set(Some(format!("Failed to delete folder: {err}"))),
        }
    }

    /// Set the scope cursor and refetch documents inside the folder.
    pub async fn enter_folder(&self, docs: &DocumentState, folder_id: i64) {
        docs.fetch_by_folder(Some(folder_id)).await;
    }

    /// Clear the scope cursor and return to the all-items view.
    pub async fn leave_folder(&self, docs: &DocumentState) {
        docs.fetch_by_folder(None).await;
    }

    /// The unified folder+file listing for the current scope.
    pub fn combined_listing(&self, docs: &DocumentState) -> Vec<ListingRow> {
        listing::combined_rows(
            &docs.documents.get(),
            &self.folders.get(),
            docs.scope.get(),
            &docs.selected_type.get(),
            docs.sort_by.get(),
        )
    }
}

impl Default for FolderState {
    fn default() -> Self {
        Self::new()
    }
}

/// Upload, then reassign the new document's folder.
async fn upload_then_move(file: &web_sys::File, folder_id: i64) -> MoveOutcome {
    let doc = match api::documents::upload(file).await {
        Ok(doc) => doc,
        Err(err) => return MoveOutcome::Failed(err),
    };
    match api::documents::move_to_folder(doc.id, Some(folder_id)).await {
        Ok(()) => MoveOutcome::Moved { document_id: doc.id },
        Err(err) => MoveOutcome::UploadedUnfiled {
            document_id: doc.id,
            error: err,
        },
    }
}
