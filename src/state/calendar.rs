//! Calendar view-model.
//!
//! Owns the event list and the displayed month. Every mutating call
//! refetches the list and broadcasts `EventsUpdated` so the statistics
//! views can refresh themselves.

use chrono::{NaiveDate, Utc};
use leptos::prelude::*;

use crate::api;
use crate::core::calendar::{self, CalendarDay};
use crate::core::{AppEvent, EventBus};
use crate::models::{CalendarEvent, EventDraft};

/// Reactive state for the calendar view.
#[derive(Clone)]
pub struct CalendarState {
    pub events: RwSignal<Vec<CalendarEvent>>,
    /// First day of the displayed month.
    pub cursor: RwSignal<NaiveDate>,
    pub selected_date: RwSignal<NaiveDate>,
    pub error: RwSignal<Option<String>>,
    bus: EventBus,
}

impl CalendarState {
    pub fn new(bus: EventBus) -> Self {
        let today = Utc::now().date_naive();
        Self {
            events: RwSignal::new(Vec::new()),
            cursor: RwSignal::new(calendar::month_start(today)),
            selected_date: RwSignal::new(today),
            error: RwSignal::new(None),
            bus,
        }
    }

    /// Replace the local event list; empty on failure.
    pub async fn fetch_events(&self) {
        match api::events::list().await {
            Ok(items) => {
                self.events.set(items);
                self.error.set(None);
            }
            Err(err) => {
                self.events.set(Vec::new());
                self.error.set(Some(format!("Failed to load events: {err}")));
            }
        }
    }

    pub async fn create_event(&self, draft: &EventDraft) {
        match api::events::create(draft).await {
            Ok(()) => {
                self.fetch_events().await;
                self.bus.emit(AppEvent::EventsUpdated);
            }
            Err(err) => self.error.set(Some(format!("Failed to create event: {err}"))),
        }
    }

    pub async fn update_event(&self, id: i64, draft: &EventDraft) {
        match api::events::update(id, draft).await {
            Ok(()) => {
                self.fetch_events().await;
                self.bus.emit(AppEvent::EventsUpdated);
            }
            Err(err) => self.error.set(Some(format!("Failed to update event: {err}"))),
        }
    }

    pub async fn delete_event(&self, id: i64) {
        match api::events::remove(id).await {
            Ok(()) => {
                self.fetch_events().await;
                self.bus.emit(AppEvent::EventsUpdated);
            }
            Err(err) => self.error.set(Some(format!("Failed to delete event: {err}"))),
        }
    }

    /// Cells of the displayed month, padded to whole weeks.
    pub fn month_days(&self) -> Vec<CalendarDay> {
        calendar::month_grid(self.cursor.get(), &self.events.get(), Utc::now().date_naive())
    }

    /// Events starting today.
    pub fn todays_events(&self) -> Vec<CalendarEvent> {
        calendar::todays_events(&self.events.get(), Utc::now().date_naive())
    }

    /// Month/year header for the displayed month (e.g., "January 2026").
    pub fn month_title(&self) -> String {
        self.cursor.get().format("%B %Y").to_string()
    }

    pub fn previous_month(&self) {
        self.cursor.update(|cursor| *cursor = calendar::previous_month(*cursor));
    }

    pub fn next_month(&self) {
        self.cursor.update(|cursor| *cursor = calendar::next_month(*cursor));
    }

    pub fn select_date(&self, date: NaiveDate) {
        self.selected_date.set(date);
    }
}
