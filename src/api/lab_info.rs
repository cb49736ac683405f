//! Lab profile endpoint

use super::client::ApiClient;
use crate::models::LabInfo;
use crate::utils::errors::Result;

impl ApiClient {
    /// Public lab profile shown on the home page
    pub async fn lab_info(&self) -> Result<LabInfo> {
        self.get_json("/lab-info", &[]).await
    }
}
