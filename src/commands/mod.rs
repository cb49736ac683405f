//! Command handlers
//!
//! One module per original page family. Every handler follows the same
//! shape the pages did: check the session, call the endpoint, render the
//! response, and print a success banner or the server's error text verbatim.
//! Mutations re-fetch the affected data before returning.

pub mod attendance;
pub mod auth;
pub mod calendar;
pub mod home;
pub mod members;
pub mod notices;
pub mod profile;
pub mod projects;

use crate::api::ApiClient;
use crate::utils::errors::{LabdeskError, Result};

/// Ensure a live session exists before an authenticated operation.
///
/// Also performs the client-side expiry check: an expired session is cleared
/// here, the CLI equivalent of the browser's top-level expiry poll.
pub fn require_session(client: &ApiClient) -> Result<()> {
    if client.session().ensure_fresh()? {
        Ok(())
    } else {
        Err(LabdeskError::NotLoggedIn)
    }
}

/// Print a success banner
pub fn banner(message: &str) {
    println!("✔ {}", message);
}

/// Print a failure banner with the error's display message
pub fn error_banner(error: &LabdeskError) {
    eprintln!("✘ {}", error.banner_message());
    if let LabdeskError::Unauthorized { redirect_to_login: true } = error {
        eprintln!("  Run `labdesk login` to sign in again.");
    }
}
