//! Project model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::notice::AuthorRef;

/// Project lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    Planning,
    Ongoing,
    Completed,
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ProjectStatus::Planning => "PLANNING",
            ProjectStatus::Ongoing => "ONGOING",
            ProjectStatus::Completed => "COMPLETED",
        };
        write!(f, "{}", label)
    }
}

/// Project record as served by `/projects` and `/projects/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    /// Free-text participant list, as entered on the form
    #[serde(default)]
    pub members: Option<String>,
    #[serde(default)]
    pub created_by: Option<AuthorRef>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for `POST /projects` and `PUT /projects/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub description: String,
    pub status: ProjectStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_deserialization() {
        let json = r#"{
            "id": 11, "title": "VR 렌더링", "summary": "실시간 렌더링 연구",
            "description": "![image](http://h/a.png)\n본문",
            "status": "ONGOING", "members": "홍길동, 김연구",
            "createdBy": {"id": 1, "name": "홍길동"},
            "createdAt": "2025-01-02T00:00:00Z"
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.status, Some(ProjectStatus::Ongoing));
        assert!(project.description.contains("본문"));
    }

    #[test]
    fn test_status_round_trip() {
        let json = serde_json::to_string(&ProjectStatus::Planning).unwrap();
        assert_eq!(json, r#""PLANNING""#);
    }
}
