//! Project endpoints

use super::client::ApiClient;
use crate::models::{Listing, Project, ProjectRequest};
use crate::utils::errors::Result;

impl ApiClient {
    /// Optionally paged listing
    pub async fn list_projects(
        &self,
        page: Option<i64>,
        size: Option<i64>,
    ) -> Result<Listing<Project>> {
        let mut query = Vec::new();
        if let Some(page) = page {
            query.push(("page", page.to_string()));
        }
        if let Some(size) = size {
            query.push(("size", size.to_string()));
        }
        self.get_json("/projects", &query).await
    }

    /// `GET /projects/{id}`
    pub async fn get_project(&self, id: i64) -> Result<Project> {
        self.get_json(&format!("/projects/{}", id), &[]).await
    }

    /// `POST /projects`
    pub async fn create_project(&self, request: &ProjectRequest) -> Result<Project> {
        self.post_json("/projects", request).await
    }

    /// `PUT /projects/{id}`
    pub async fn update_project(&self, id: i64, request: &ProjectRequest) -> Result<()> {
        self.put_json(&format!("/projects/{}", id), request).await
    }

    /// `DELETE /projects/{id}`
    pub async fn delete_project(&self, id: i64) -> Result<()> {
        self.delete(&format!("/projects/{}", id)).await
    }
}
