//! Member model

use serde::{Deserialize, Serialize};

/// Lab member classification, controls which page sections a member shows in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    None,
    Professor,
    LabLead,
    Member,
    Alumni,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Role::None => "NONE",
            Role::Professor => "PROFESSOR",
            Role::LabLead => "LAB_LEAD",
            Role::Member => "MEMBER",
            Role::Alumni => "ALUMNI",
        };
        write!(f, "{}", label)
    }
}

/// Member record as served by `/members` and `/members/me`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub login_id: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub research_area: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub graduation_year: Option<i32>,
    #[serde(default)]
    pub sort_order: Option<i32>,
}

/// Payload for `POST /members/admin`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberRequest {
    pub name: String,
    pub login_id: String,
    pub password: String,
    pub role: Role,
    pub admin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
}

/// Payload for `PUT /members/admin/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<i32>,
}

/// Payload for `PUT /members/me`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// Payload for `PUT /members/me/password`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

/// Payload for `PUT /members/admin/{id}/password`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_deserialization() {
        let json = r#"{
            "id": 3, "name": "홍길동", "loginId": "hong", "role": "LAB_LEAD",
            "admin": true, "degree": "PhD", "photoUrl": null, "sortOrder": 1
        }"#;
        let member: Member = serde_json::from_str(json).unwrap();
        assert_eq!(member.role, Role::LabLead);
        assert!(member.admin);
        assert_eq!(member.login_id.as_deref(), Some("hong"));
        assert_eq!(member.sort_order, Some(1));
    }

    #[test]
    fn test_member_minimal_fields() {
        // Public listing may omit everything but id/name/role
        let json = r#"{"id": 1, "name": "김연구", "role": "MEMBER"}"#;
        let member: Member = serde_json::from_str(json).unwrap();
        assert!(!member.admin);
        assert!(member.email.is_none());
    }

    #[test]
    fn test_update_request_skips_unset_fields() {
        let req = UpdateMemberRequest { admin: Some(true), ..Default::default() };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"admin":true}"#);
    }
}
