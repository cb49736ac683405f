//! Calendar event model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Event category filter on the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventCategory {
    Laboratory,
    Personal,
}

impl EventCategory {
    /// Normalize the wire category string.
    ///
    /// The backend may serve the personal category as the legacy literal
    /// `개인`; a missing category counts as `Laboratory`.
    pub fn normalize(raw: Option<&str>) -> EventCategory {
        match raw {
            Some("Personal") | Some("개인") => EventCategory::Personal,
            _ => EventCategory::Laboratory,
        }
    }

    /// Wire value sent when creating or updating an event
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Laboratory => "Laboratory",
            EventCategory::Personal => "Personal",
        }
    }
}

/// Event record as served by `/events`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: i64,
    pub title: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    /// Raw category string; see [`EventCategory::normalize`]
    #[serde(default)]
    pub category: Option<String>,
}

impl CalendarEvent {
    /// Normalized category of this event
    pub fn category(&self) -> EventCategory {
        EventCategory::normalize(self.category.as_deref())
    }
}

/// Payload for `POST /events` and `PUT /events/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    pub title: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_normalization() {
        assert_eq!(EventCategory::normalize(Some("개인")), EventCategory::Personal);
        assert_eq!(EventCategory::normalize(Some("Personal")), EventCategory::Personal);
        assert_eq!(EventCategory::normalize(Some("Laboratory")), EventCategory::Laboratory);
        assert_eq!(EventCategory::normalize(None), EventCategory::Laboratory);
    }

    #[test]
    fn test_event_deserialization() {
        let json = r#"{
            "id": 5, "title": "학회 출장",
            "startAt": "2025-04-01T00:00:00Z", "endAt": "2025-04-03T09:00:00Z",
            "category": "개인"
        }"#;
        let event: CalendarEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.category(), EventCategory::Personal);
    }
}
