//! File upload endpoint

use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use super::client::ApiClient;
use crate::utils::errors::Result;

/// Response of `POST /upload`
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}

impl ApiClient {
    /// Multipart passthrough to object storage; returns the public URL of
    /// the stored file
    pub async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<UploadResponse> {
        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name.to_string()));
        self.post_multipart("/upload", form).await
    }
}
