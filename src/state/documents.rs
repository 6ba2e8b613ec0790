//! Document view-model.
//!
//! Owns the authoritative in-memory document list for the current folder
//! scope. The list is a cache refetched wholesale from the server after
//! each mutating call; the only optimistic mutation is the immediate
//! local removal on soft delete.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::config;
use crate::core::listing::{self, RecentFile};
use crate::core::{AppEvent, Debouncer, EventBus};
use crate::models::{Document, SortKey, TypeFilter};
use crate::utils::dom;

/// Reactive state for the documents view.
#[derive(Clone)]
pub struct DocumentState {
    /// Active documents in the current scope.
    pub documents: RwSignal<Vec<Document>>,
    pub selected_type: RwSignal<TypeFilter>,
    pub sort_by: RwSignal<SortKey>,
    /// Folder scope cursor (`None` = unscoped query).
    pub scope: RwSignal<Option<i64>>,
    /// An upload or download is in flight.
    pub busy: RwSignal<bool>,
    /// Last user-visible failure, cleared by the next success.
    pub error: RwSignal<Option<String>>,
    bus: EventBus,
    refresh: Debouncer,
}

impl DocumentState {
    pub fn new(bus: EventBus) -> Self {
        let state = Self {
            documents: RwSignal::new(Vec::new()),
            selected_type: RwSignal::new(TypeFilter::All),
            sort_by: RwSignal::new(SortKey::Latest),
            scope: RwSignal::new(None),
            busy: RwSignal::new(false),
            error: RwSignal::new(None),
            bus: bus.clone(),
            refresh: Debouncer::new(),
        };

        // A restore in the trash view makes this list stale; refetch the
        // current scope once the burst settles.
        let listener = state.clone();
        bus.subscribe(move |event| {
            if let AppEvent::DocumentRestored { id, .. } = event {
                let state = listener.clone();
                listener.refresh.call(
                    move || {
                        spawn_local(async move {
                            let scope = state.scope.get_untracked();
                            state.fetch_by_folder(scope).await;
                        });
                    },
                    config::REFRESH_DEBOUNCE_MS,
                    &format!("document-restored-{id}"),
                );
            }
        });

        state
    }

    /// Replace the local list with the server's documents for `folder_id`.
    ///
    /// On failure the list is cleared rather than left stale, and the
    /// error is surfaced.
    pub async fn fetch_by_folder(&self, folder_id: Option<i64>) {
        self.scope.set(folder_id);
        match api::documents::list(folder_id).await {
            Ok(mut items) => {
                items.retain(Document::is_active);
                self.documents.set(items);
                self.error.set(None);
            }
            Err(err) => {
                self.documents.set(Vec::new());
                self.error.set(Some(format!("Failed to load documents: {err}")));
            }
        }
    }

    /// Upload a file into the current scope.
    ///
    /// The prior list stays untouched on failure.
    pub async fn upload(&self, file: web_sys::File) {
        self.busy.set(true);
        match api::documents::upload(&file).await {
            Ok(_) => {
                let scope = self.scope.get_untracked();
                self.fetch_by_folder(scope).await;
            }
            Err(err) => self.error.set(Some(format!("Upload failed: {err}"))),
        }
        self.busy.set(false);
    }

    /// Fetch a document's content and offer it as a client-side save.
    pub async fn download(&self, doc: &Document) {
        self.busy.set(true);
        let result = api::documents::download(doc.id).await;
        match result.and_then(|bytes| dom::save_blob(&bytes, doc.download_name())) {
            Ok(()) => self.error.set(None),
            Err(err) => self.error.set(Some(format!("Download failed: {err}"))),
        }
        self.busy.set(false);
    }

    /// Soft-delete a document and notify sibling views.
    ///
    /// The entry is removed from the local list immediately for snappy
    /// feedback; the next refetch confirms. Failure leaves the list
    /// unchanged.
    pub async fn soft_delete(&self, doc: &Document) {
        match api::documents::remove(doc.id, false).await {
            Ok(()) => {
                let id = doc.id;
                self.documents.update(|list| list.retain(|d| d.id != id));
                self.error.set(None);
                self.bus.emit(AppEvent::DocumentDeleted {
                    id,
                    name: doc.original_name.clone(),
                });
            }
            Err(err) => self.error.set(Some(format!("Delete failed: {err}"))),
        }
    }

    /// Filtered and sorted documents for the flat listing.
    pub fn sorted_and_filtered(&self) -> Vec<Document> {
        listing::sorted_and_filtered(
            &self.documents.get(),
            &self.selected_type.get(),
            self.sort_by.get(),
        )
    }

    /// The most recent documents, annotated for the recent strip.
    pub fn recent_files(&self) -> Vec<RecentFile> {
        listing::recent_files(&self.documents.get(), &self.selected_type.get())
    }
}
