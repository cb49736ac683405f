//! Member and profile endpoints

use super::client::ApiClient;
use crate::models::{
    ChangePasswordRequest, CreateMemberRequest, Member, ResetPasswordRequest,
    UpdateMemberRequest, UpdateProfileRequest,
};
use crate::utils::errors::Result;

impl ApiClient {
    /// Public member listing from `GET /members`, ordered by sort order
    pub async fn list_members(&self) -> Result<Vec<Member>> {
        self.get_json("/members", &[]).await
    }

    /// The authenticated member's own record (`GET /members/me`)
    pub async fn me(&self) -> Result<Member> {
        self.get_json("/members/me", &[]).await
    }

    /// Update own profile fields via `PUT /members/me`
    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<()> {
        self.put_json("/members/me", request).await
    }

    /// Change own password
    pub async fn change_password(&self, old_password: &str, new_password: &str) -> Result<()> {
        let request = ChangePasswordRequest {
            old_password: old_password.to_string(),
            new_password: new_password.to_string(),
        };
        self.put_json("/members/me/password", &request).await
    }

    /// Create a member (admin)
    pub async fn create_member(&self, request: &CreateMemberRequest) -> Result<Member> {
        self.post_json("/members/admin", request).await
    }

    /// Update a member (admin)
    pub async fn update_member(&self, id: i64, request: &UpdateMemberRequest) -> Result<()> {
        self.put_json(&format!("/members/admin/{}", id), request).await
    }

    /// Reset a member's password (admin)
    pub async fn reset_member_password(&self, id: i64, new_password: &str) -> Result<()> {
        let request = ResetPasswordRequest { new_password: new_password.to_string() };
        self.put_json(&format!("/members/admin/{}/password", id), &request).await
    }

    /// Remove a member (admin)
    pub async fn delete_member(&self, id: i64) -> Result<()> {
        self.delete(&format!("/members/admin/{}", id)).await
    }

    /// Persist the full display ordering via `PUT /members/admin/order` (admin).
    ///
    /// The body is the complete ordered id list; ordering is rearranged
    /// client-side and only sent on an explicit save.
    pub async fn save_member_order(&self, ordered_ids: &[i64]) -> Result<()> {
        self.put_json("/members/admin/order", &ordered_ids).await
    }
}
