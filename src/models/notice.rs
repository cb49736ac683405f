//! Notice model
//!
//! Notices, lab news and resources share one backend record type,
//! distinguished by a category tag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category tag shared by the notice-backed content records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NoticeCategory {
    Notice,
    News,
    Resource,
}

impl NoticeCategory {
    /// Wire value used in the `category` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeCategory::Notice => "NOTICE",
            NoticeCategory::News => "NEWS",
            NoticeCategory::Resource => "RESOURCE",
        }
    }
}

/// Reference to the member who authored a record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRef {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub login_id: Option<String>,
}

/// Server-managed attachment row on a notice
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeAttachment {
    pub id: i64,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub file_key: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub size_bytes: Option<i64>,
}

/// Notice record as served by `/notices` and `/notices/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub author: Option<AuthorRef>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub category: Option<NoticeCategory>,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub attachments: Vec<NoticeAttachment>,
}

/// Payload for `POST /notices`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoticeRequest {
    pub title: String,
    pub content: String,
    pub category: NoticeCategory,
}

/// Payload for `PUT /notices/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoticeRequest {
    pub title: String,
    pub content: String,
}
