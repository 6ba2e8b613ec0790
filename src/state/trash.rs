//! Trash view-model.
//!
//! Owns the union of soft-deleted documents and folders and the
//! restore/hard-delete operations over them.

use chrono::Utc;
use futures_util::future::try_join;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::config;
use crate::core::retention::{self, RetentionMode};
use crate::core::{AppEvent, Debouncer, EventBus};
use crate::models::{PurgeItem, TrashEntry, TrashKind};

/// Reactive state for the trash view.
#[derive(Clone)]
pub struct TrashState {
    pub entries: RwSignal<Vec<TrashEntry>>,
    pub search: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    bus: EventBus,
    refresh: Debouncer,
}

impl TrashState {
    pub fn new(bus: EventBus) -> Self {
        let state = Self {
            entries: RwSignal::new(Vec::new()),
            search: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            bus: bus.clone(),
            refresh: Debouncer::new(),
        };

        // Deletions in the documents view land here; refetch once the
        // burst settles.
        let listener = state.clone();
        bus.subscribe(move |event| {
            if let AppEvent::DocumentDeleted { id, .. } = event {
                let state = listener.clone();
                listener.refresh.call(
                    move || {
                        spawn_local(async move {
                            state.fetch_trash().await;
                        });
                    },
                    config::REFRESH_DEBOUNCE_MS,
                    &format!("document-deleted-{id}"),
                );
            }
        });

        state
    }

    /// Fetch trashed documents and folders concurrently and merge them.
    ///
    /// Partial failure counts as total failure: a half-populated trash is
    /// never shown.
    pub async fn fetch_trash(&self) {
        match try_join(api::documents::trash(), api::folders::trash()).await {
            Ok((documents, folders)) => {
                let entries = documents
                    .into_iter()
                    .map(TrashEntry::from_document)
                    .chain(folders.into_iter().map(TrashEntry::from_folder))
                    .collect();
                self.entries.set(entries);
                self.error.set(None);
            }
            Err(err) => {
                self.entries.set(Vec::new());
                self.error.set(Some(format!("Failed to load trash: {err}")));
            }
        }
    }

    /// Restore an entry, dispatching on its kind, then refetch the trash
    /// and notify sibling views.
    pub async fn restore(&self, entry: &TrashEntry) {
        let result = match entry.kind {
            TrashKind::Folder => api::folders::restore(entry.id).await,
            TrashKind::Document => api::documents::restore(entry.id).await,
        };
        match result {
            Ok(()) => {
                self.fetch_trash().await;
                self.bus.emit(AppEvent::DocumentRestored {
                    id: entry.id,
                    kind: entry.kind,
                    name: entry.name.clone(),
                });
            }
            Err(err) => self.error.set(Some(format!("Failed to restore item: {err}"))),
        }
    }

    /// Permanently delete an entry via the batch purge endpoint.
    ///
    /// Failure leaves the entry in place.
    pub async fn hard_delete(&self, entry: &TrashEntry) {
        let batch = [PurgeItem {
            id: entry.id,
            kind: entry.kind,
        }];
        match api::trash::purge(&batch).await {
            Ok(()) => {
                let id = entry.id;
                let kind = entry.kind;
                self.entries
                    .update(|list| list.retain(|e| !(e.id == id && e.kind == kind)));
                self.error.set(None);
            }
            Err(err) => self.error.set(Some(format!("Failed to delete permanently: {err}"))),
        }
    }

    /// Entries matching the current search query.
    pub fn filtered(&self) -> Vec<TrashEntry> {
        let query = self.search.get();
        self.entries
            .get()
            .into_iter()
            .filter(|entry| entry.matches(&query))
            .collect()
    }

    /// Render retention info for an entry ("N day left" or the deadline).
    pub fn retention_info(&self, entry: &TrashEntry, mode: RetentionMode) -> String {
        match entry.deleted_at {
            Some(deleted_at) => retention::retention_info(deleted_at, mode, Utc::now()),
            None => String::new(),
        }
    }
}
