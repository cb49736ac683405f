//! HTTP client plumbing for the lab REST API
//!
//! This module owns request construction (base URL joining, auth headers),
//! response decoding and error mapping. Endpoint groups live in sibling
//! modules as additional `impl ApiClient` blocks.

use std::time::{Duration, Instant};

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Settings;
use crate::session::SessionStore;
use crate::utils::errors::{LabdeskError, Result};
use crate::utils::logging;

/// Error payload shape served by the backend on failures
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Typed client for the lab backend
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    /// Create a new ApiClient instance
    pub fn new(settings: &Settings, session: SessionStore) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.api.timeout_seconds))
            .user_agent(settings.api.user_agent.clone())
            .build()
            .map_err(LabdeskError::Http)?;

        Ok(Self {
            http,
            base_url: settings.api.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// Session store shared with the commands
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach auth headers the way the browser client's interceptor does:
    /// bearer token when one is stored, legacy `X-USER` username otherwise.
    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        if let Some(token) = self.session.token() {
            builder.bearer_auth(token)
        } else if let Some(username) = self.session.username() {
            builder.header("X-USER", username)
        } else {
            builder
        }
    }

    /// Send a request and map failure statuses to errors.
    ///
    /// A 401 clears the stored session; the login redirect is signalled only
    /// when the clear actually removed something, so it fires exactly once.
    async fn send(&self, method: Method, path: &str, builder: RequestBuilder) -> Result<Response> {
        let started = Instant::now();
        let response = builder.send().await.map_err(LabdeskError::Http)?;
        let status = response.status();
        logging::log_api_call(
            method.as_str(),
            path,
            status.as_u16(),
            started.elapsed().as_millis() as u64,
        );

        if status == StatusCode::UNAUTHORIZED {
            let cleared = self.session.clear()?;
            if cleared {
                warn!(path = path, "Backend rejected the session token, logged out");
            }
            return Err(LabdeskError::Unauthorized { redirect_to_login: cleared });
        }

        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.message.unwrap_or_else(|| format!("HTTP {}", status.as_u16())),
                Err(_) => format!("HTTP {}", status.as_u16()),
            };
            return Err(LabdeskError::Api { status: status.as_u16(), message });
        }

        Ok(response)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        debug!(path = path, "GET request");
        let builder = self.with_auth(self.http.get(self.url(path)).query(query));
        let response = self.send(Method::GET, path, builder).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        debug!(path = path, "POST request");
        let builder = self.with_auth(self.http.post(self.url(path)).json(body));
        let response = self.send(Method::POST, path, builder).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!(path = path, "POST request (empty body)");
        let builder = self.with_auth(self.http.post(self.url(path)).json(&serde_json::json!({})));
        let response = self.send(Method::POST, path, builder).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        debug!(path = path, "PUT request");
        let builder = self.with_auth(self.http.put(self.url(path)).json(body));
        self.send(Method::PUT, path, builder).await?;
        Ok(())
    }

    /// PUT with query parameters and no body (the pin toggle endpoint)
    pub(crate) async fn put_query(&self, path: &str, query: &[(&str, String)]) -> Result<()> {
        debug!(path = path, "PUT request (query only)");
        let builder = self.with_auth(self.http.put(self.url(path)).query(query));
        self.send(Method::PUT, path, builder).await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        debug!(path = path, "DELETE request");
        let builder = self.with_auth(self.http.delete(self.url(path)));
        self.send(Method::DELETE, path, builder).await?;
        Ok(())
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        debug!(path = path, "POST multipart request");
        let builder = self.with_auth(self.http.post(self.url(path)).multipart(form));
        let response = self.send(Method::POST, path, builder).await?;
        Ok(response.json().await?)
    }

    /// POST without authentication headers (login)
    pub(crate) async fn post_json_anonymous<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        debug!(path = path, "POST request (anonymous)");
        let builder = self.http.post(self.url(path)).json(body);
        let response = self.send(Method::POST, path, builder).await?;
        Ok(response.json().await?)
    }
}
