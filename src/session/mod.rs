//! Session management module
//!
//! Device-local persistence of the authenticated session, mirroring the
//! browser client's localStorage token/username pair.

pub mod store;

pub use store::SessionStore;
