//! Calendar event endpoints

use super::client::ApiClient;
use crate::models::{CalendarEvent, EventRequest};
use crate::utils::errors::Result;

impl ApiClient {
    /// All events visible to the member
    pub async fn list_events(&self) -> Result<Vec<CalendarEvent>> {
        self.get_json("/events", &[]).await
    }

    /// `POST /events`
    pub async fn create_event(&self, request: &EventRequest) -> Result<CalendarEvent> {
        self.post_json("/events", request).await
    }

    /// `PUT /events/{id}`
    pub async fn update_event(&self, id: i64, request: &EventRequest) -> Result<()> {
        self.put_json(&format!("/events/{}", id), request).await
    }

    /// `DELETE /events/{id}`
    pub async fn delete_event(&self, id: i64) -> Result<()> {
        self.delete(&format!("/events/{}", id)).await
    }
}
