//! Statistics data view-model.
//!
//! Fetches the events and documents datasets concurrently and keeps them
//! fresh by listening (debounced) to the cross-view notifications. Chart
//! rendering itself is an external concern; this state only owns the
//! numbers.

use chrono::Utc;
use futures_util::future::{join, try_join};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::config;
use crate::core::stats::{self, Period, PeriodKind, StatusCounts};
use crate::core::{ApiError, AppEvent, Debouncer, EventBus};
use crate::models::{CalendarEvent, Document};

/// Active plus trashed documents, merged for status statistics.
async fn fetch_all_documents() -> Result<Vec<Document>, ApiError> {
    let (active, trashed) = try_join(api::documents::list(None), api::documents::trash()).await?;
    Ok(active.into_iter().chain(trashed).collect())
}

/// Reactive state for the statistics view.
#[derive(Clone)]
pub struct ChartsState {
    pub events: RwSignal<Vec<CalendarEvent>>,
    /// All documents, trashed included (status statistics need both).
    pub documents: RwSignal<Vec<Document>>,
    pub period_kind: RwSignal<PeriodKind>,
    pub error: RwSignal<Option<String>>,
    bus: EventBus,
    refresh: Debouncer,
}

impl ChartsState {
    pub fn new(bus: EventBus) -> Self {
        let state = Self {
            events: RwSignal::new(Vec::new()),
            documents: RwSignal::new(Vec::new()),
            period_kind: RwSignal::new(PeriodKind::Week),
            error: RwSignal::new(None),
            bus: bus.clone(),
            refresh: Debouncer::new(),
        };

        let listener = state.clone();
        bus.subscribe(move |event| {
            let reason = match event {
                AppEvent::DocumentDeleted { id, .. } => format!("document-deleted-{id}"),
                AppEvent::DocumentRestored { id, .. } => format!("document-restored-{id}"),
                AppEvent::EventsUpdated => "events-updated".to_string(),
                // Our own completion notification; reacting to it would loop.
                AppEvent::ChartsDataUpdated { .. } => return,
            };
            let state = listener.clone();
            listener.refresh.call(
                move || {
                    spawn_local(async move {
                        state.refresh_data().await;
                    });
                },
                config::REFRESH_DEBOUNCE_MS,
                &reason,
            );
        });

        state
    }

    /// Fetch both datasets concurrently, join, then announce the refresh.
    ///
    /// Either list is emptied (never left stale) when its fetch fails.
    pub async fn refresh_data(&self) {
        let (events_result, documents_result) =
            join(api::events::list(), fetch_all_documents()).await;

        let mut failure = None;
        match events_result {
            Ok(events) => self.events.set(events),
            Err(err) => {
                self.events.set(Vec::new());
                failure = Some(format!("Failed to load events: {err}"));
            }
        }
        match documents_result {
            Ok(documents) => self.documents.set(documents),
            Err(err) => {
                self.documents.set(Vec::new());
                failure = Some(format!("Failed to load documents: {err}"));
            }
        }
        self.error.set(failure);

        self.bus.emit(AppEvent::ChartsDataUpdated {
            events_count: self.events.with_untracked(Vec::len),
            documents_count: self.documents.with_untracked(Vec::len),
            timestamp: Utc::now(),
        });
    }

    /// Documents bucketed by lifecycle state.
    pub fn status_counts(&self) -> StatusCounts {
        stats::status_counts(&self.documents.get())
    }

    /// Documents created per period, for the selected granularity.
    pub fn document_buckets(&self) -> Vec<(Period, usize)> {
        let today = Utc::now().date_naive();
        let stamps: Vec<_> = self
            .documents
            .get()
            .iter()
            .map(|d| d.created_at)
            .collect();
        stats::document_periods(self.period_kind.get(), today)
            .into_iter()
            .map(|period| {
                let count = stats::count_in_period(&stamps, &period);
                (period, count)
            })
            .collect()
    }

    /// Events starting per period, for the selected granularity.
    pub fn event_buckets(&self) -> Vec<(Period, usize)> {
        let today = Utc::now().date_naive();
        let stamps: Vec<_> = self.events.get().iter().map(|e| e.start).collect();
        stats::event_periods(self.period_kind.get(), today)
            .into_iter()
            .map(|period| {
                let count = stats::count_in_period(&stamps, &period);
                (period, count)
            })
            .collect()
    }
}
