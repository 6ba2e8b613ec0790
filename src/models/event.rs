//! Calendar event types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A calendar event as returned by the calendar service.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CalendarEvent {
    pub id: i64,
    pub title: String,
    #[serde(rename = "start_time")]
    pub start: DateTime<Utc>,
    #[serde(rename = "end_time")]
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub event_type: Option<String>,
}

impl CalendarEvent {
    /// Event type for display, defaulting untyped events to "meeting".
    pub fn kind_label(&self) -> &str {
        self.event_type.as_deref().unwrap_or("meeting")
    }
}

/// Payload for event creation and update calls.
#[derive(Clone, Debug, Serialize)]
pub struct EventDraft {
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_field_renames() {
        let event: CalendarEvent = serde_json::from_str(
            r#"{
                "id": 1,
                "title": "Standup",
                "start_time": "2026-01-05T09:00:00Z",
                "end_time": "2026-01-05T09:15:00Z"
            }"#,
        )
        .expect("event parses");
        assert_eq!(event.title, "Standup");
        assert_eq!(event.kind_label(), "meeting");
    }

    #[test]
    fn test_draft_omits_absent_fields() {
        let draft = EventDraft {
            title: "Review".to_string(),
            start_time: "2026-01-05T09:00:00Z".parse().unwrap(),
            end_time: "2026-01-05T10:00:00Z".parse().unwrap(),
            location: None,
            description: None,
            event_type: Some("deadline".to_string()),
        };
        let json = serde_json::to_string(&draft).expect("serializes");
        assert!(!json.contains("location"));
        assert!(json.contains(r#""event_type":"deadline""#));
    }
}
