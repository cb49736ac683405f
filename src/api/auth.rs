//! Authentication endpoints

use serde::{Deserialize, Serialize};
use tracing::info;

use super::client::ApiClient;
use crate::utils::errors::Result;
use crate::utils::logging;

/// Payload for `POST /auth/login`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub login_id: String,
    pub password: String,
}

/// Response of `POST /auth/login`
///
/// Older deployments answer without a token; the session then falls back to
/// the legacy `X-USER` identification header.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub login_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl ApiClient {
    /// Log in and persist the returned session.
    pub async fn login(&self, login_id: &str, password: &str) -> Result<LoginResponse> {
        let request = LoginRequest {
            login_id: login_id.trim().to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.post_json_anonymous("/auth/login", &request).await?;

        let username = response
            .login_id
            .clone()
            .unwrap_or_else(|| request.login_id.clone());
        self.session().save(response.token.clone(), &username)?;
        logging::log_session_event(Some(&username), "login");

        Ok(response)
    }

    /// Drop the persisted session; returns whether one existed.
    pub fn logout(&self) -> Result<bool> {
        let cleared = self.session().clear()?;
        if cleared {
            info!("Logged out");
        }
        Ok(cleared)
    }
}
