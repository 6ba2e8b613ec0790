//! Dashboard view-model: stat tiles, notification count, and the
//! recent-activity feed.

use chrono::{Duration, Utc};
use leptos::prelude::*;

use crate::api;
use crate::config;
use crate::core::calendar;
use crate::core::stats::{self, Activity};
use crate::models::{CalendarEvent, Document};

/// Reactive state for the dashboard view.
#[derive(Clone)]
pub struct DashboardState {
    pub document_count: RwSignal<usize>,
    /// Events starting today.
    pub scheduled_today: RwSignal<usize>,
    /// Documents uploaded within the notification window.
    pub notification_count: RwSignal<usize>,
    pub activities: RwSignal<Vec<Activity>>,
    pub error: RwSignal<Option<String>>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            document_count: RwSignal::new(0),
            scheduled_today: RwSignal::new(0),
            notification_count: RwSignal::new(0),
            activities: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
        }
    }

    /// Load the stat tiles from the documents list plus the already
    /// fetched calendar events. Everything resets to zero on failure.
    pub async fn fetch_stats(&self, events: &[CalendarEvent]) {
        let now = Utc::now();
        self.scheduled_today
            .set(calendar::todays_events(events, now.date_naive()).len());

        match api::documents::list(None).await {
            Ok(mut documents) => {
                documents.retain(Document::is_active);
                let window = now - Duration::days(config::NOTIFICATION_WINDOW_DAYS);
                self.document_count.set(documents.len());
                self.notification_count
                    .set(documents.iter().filter(|d| d.created_at >= window).count());
                self.activities.set(stats::recent_activities(&documents, now));
                self.error.set(None);
            }
            Err(err) => {
                self.document_count.set(0);
                self.notification_count.set(0);
                self.activities.set(Vec::new());
                self.error.set(Some(format!("Failed to load stats: {err}")));
            }
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}
