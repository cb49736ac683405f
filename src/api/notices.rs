//! Notice endpoints
//!
//! Notices, lab news and resources all go through `/notices`, distinguished
//! by the category tag.

use reqwest::multipart::{Form, Part};

use super::client::ApiClient;
use crate::models::{CreateNoticeRequest, Listing, Notice, NoticeCategory, UpdateNoticeRequest};
use crate::utils::errors::Result;

impl ApiClient {
    /// List by category, optionally paged
    pub async fn list_notices(
        &self,
        category: NoticeCategory,
        page: Option<i64>,
        size: Option<i64>,
    ) -> Result<Listing<Notice>> {
        let mut query = vec![("category", category.as_str().to_string())];
        if let Some(page) = page {
            query.push(("page", page.to_string()));
        }
        if let Some(size) = size {
            query.push(("size", size.to_string()));
        }
        self.get_json("/notices", &query).await
    }

    /// `GET /notices/{id}`
    pub async fn get_notice(&self, id: i64) -> Result<Notice> {
        self.get_json(&format!("/notices/{}", id), &[]).await
    }

    /// `POST /notices`
    pub async fn create_notice(&self, request: &CreateNoticeRequest) -> Result<Notice> {
        self.post_json("/notices", request).await
    }

    /// `PUT /notices/{id}`
    pub async fn update_notice(&self, id: i64, request: &UpdateNoticeRequest) -> Result<()> {
        self.put_json(&format!("/notices/{}", id), request).await
    }

    /// `DELETE /notices/{id}`
    pub async fn delete_notice(&self, id: i64) -> Result<()> {
        self.delete(&format!("/notices/{}", id)).await
    }

    /// Toggle the pinned flag via `PUT /notices/{id}/pin?pinned=`
    pub async fn set_notice_pinned(&self, id: i64, pinned: bool) -> Result<()> {
        self.put_query(&format!("/notices/{}/pin", id), &[("pinned", pinned.to_string())])
            .await
    }

    /// Multipart update carrying text fields and attachment files in one
    /// `POST /notices/{id}/form` request
    pub async fn update_notice_form(
        &self,
        id: i64,
        title: &str,
        content: &str,
        files: Vec<(String, Vec<u8>)>,
    ) -> Result<Notice> {
        let mut form = Form::new()
            .text("title", title.to_string())
            .text("content", content.to_string());
        for (name, bytes) in files {
            form = form.part("files", Part::bytes(bytes).file_name(name));
        }
        self.post_multipart(&format!("/notices/{}/form", id), form).await
    }
}
