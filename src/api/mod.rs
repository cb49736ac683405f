//! API client module
//!
//! Typed client for the lab backend REST API. `client` owns the HTTP
//! plumbing; the remaining modules add one endpoint group each, mirroring
//! the original page families.

pub mod attendance;
pub mod auth;
pub mod client;
pub mod events;
pub mod lab_info;
pub mod members;
pub mod notices;
pub mod projects;
pub mod upload;

pub use auth::{LoginRequest, LoginResponse};
pub use client::ApiClient;
pub use upload::UploadResponse;
