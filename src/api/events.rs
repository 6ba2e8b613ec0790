//! Calendar event endpoints.

use super::{ListResponse, http};
use crate::core::ApiError;
use crate::models::{CalendarEvent, EventDraft};

/// List all calendar events.
pub async fn list() -> Result<Vec<CalendarEvent>, ApiError> {
    let response: ListResponse<CalendarEvent> = http::get_json("/api/calendar/events").await?;
    Ok(response.items)
}

/// Create an event.
pub async fn create(draft: &EventDraft) -> Result<(), ApiError> {
    http::post_json_status("/api/calendar/events", draft).await
}

/// Update an event.
pub async fn update(id: i64, draft: &EventDraft) -> Result<(), ApiError> {
    http::put_json_status(&format!("/api/calendar/events/{id}"), draft).await
}

/// Delete an event.
pub async fn remove(id: i64) -> Result<(), ApiError> {
    http::delete(&format!("/api/calendar/events/{id}"), &[]).await
}
