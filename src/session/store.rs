//! Persisted session storage
//!
//! This module handles persistence of the authenticated session (bearer token
//! and username) in a device-local JSON file, the CLI counterpart of the
//! browser's localStorage. The file is read at the start of each relevant
//! operation and cleared on logout or when the backend rejects the token.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::utils::errors::{LabdeskError, Result};

/// On-disk session payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionData {
    token: Option<String>,
    username: Option<String>,
    saved_at: Option<DateTime<Utc>>,
}

impl SessionData {
    fn is_empty(&self) -> bool {
        self.token.is_none() && self.username.is_none()
    }
}

/// File-backed session store shared by the API client and the commands
#[derive(Clone)]
pub struct SessionStore {
    path: PathBuf,
    ttl_seconds: u64,
    data: Arc<Mutex<SessionData>>,
}

impl SessionStore {
    /// Open the session store, loading any previously persisted session.
    pub fn open(config: &SessionConfig) -> Result<Self> {
        let path = match &config.file_path {
            Some(p) => p.clone(),
            None => default_session_path()?,
        };
        let data = load_file(&path)?;
        debug!(path = %path.display(), has_token = data.token.is_some(), "Session store opened");

        Ok(Self {
            path,
            ttl_seconds: config.ttl_seconds,
            data: Arc::new(Mutex::new(data)),
        })
    }

    /// Store the session returned by a successful login.
    pub fn save(&self, token: Option<String>, username: &str) -> Result<()> {
        let data = SessionData {
            token,
            username: Some(username.to_string()),
            saved_at: Some(Utc::now()),
        };
        write_file(&self.path, &data)?;
        *self.lock() = data;
        info!(username = username, "Session saved");
        Ok(())
    }

    /// Clear the persisted session.
    ///
    /// Returns whether anything was actually removed, so the 401 logout path
    /// can fire its login redirect exactly once.
    pub fn clear(&self) -> Result<bool> {
        let mut data = self.lock();
        if data.is_empty() {
            return Ok(false);
        }
        let username = data.username.take();
        *data = SessionData::default();
        drop(data);

        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        info!(username = username.as_deref(), "Session cleared");
        Ok(true)
    }

    /// Currently stored bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.lock().token.clone()
    }

    /// Currently stored username, if any.
    pub fn username(&self) -> Option<String> {
        self.lock().username.clone()
    }

    /// Whether the stored session has outlived the configured TTL.
    pub fn is_expired(&self) -> bool {
        let data = self.lock();
        match data.saved_at {
            Some(saved_at) if !data.is_empty() => {
                let age = Utc::now() - saved_at;
                age.num_seconds() >= self.ttl_seconds as i64
            }
            _ => false,
        }
    }

    /// Clear an expired session and report whether a live session remains.
    ///
    /// The browser client polls for expiry in its top-level component; a
    /// one-shot CLI performs the same check at the start of each command.
    pub fn ensure_fresh(&self) -> Result<bool> {
        if self.is_expired() {
            warn!("Stored session has expired");
            self.clear()?;
            return Ok(false);
        }
        Ok(!self.lock().is_empty())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SessionData> {
        // Lock poisoning only happens if a writer panicked; recover the data.
        self.data.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn default_session_path() -> Result<PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| LabdeskError::Config("Could not determine config directory".to_string()))?;
    Ok(base.join("labdesk").join("session.json"))
}

fn load_file(path: &Path) -> Result<SessionData> {
    if !path.exists() {
        return Ok(SessionData::default());
    }
    let raw = std::fs::read_to_string(path)?;
    match serde_json::from_str(&raw) {
        Ok(data) => Ok(data),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Corrupted session file, starting fresh");
            Ok(SessionData::default())
        }
    }
}

fn write_file(path: &Path, data: &SessionData) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let raw = serde_json::to_string_pretty(data)?;
    std::fs::write(path, raw)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir, ttl_seconds: u64) -> SessionStore {
        let config = SessionConfig {
            file_path: Some(dir.path().join("session.json")),
            ttl_seconds,
        };
        SessionStore::open(&config).unwrap()
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir, 3600);
        store.save(Some("jwt-token".to_string()), "alice").unwrap();

        let reopened = store_in(&dir, 3600);
        assert_eq!(reopened.token().as_deref(), Some("jwt-token"));
        assert_eq!(reopened.username().as_deref(), Some("alice"));
    }

    #[test]
    fn test_clear_reports_only_first_time() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir, 3600);
        store.save(Some("jwt-token".to_string()), "alice").unwrap();

        assert!(store.clear().unwrap());
        assert!(!store.clear().unwrap());
        assert!(store.token().is_none());
    }

    #[test]
    fn test_expired_session_is_cleared_by_ensure_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir, 0);
        store.save(Some("jwt-token".to_string()), "alice").unwrap();

        // ttl of zero: saved session is immediately stale
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(store.is_expired());
        assert!(!store.ensure_fresh().unwrap());
        assert!(store.token().is_none());
    }

    #[test]
    fn test_legacy_session_without_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir, 3600);
        store.save(None, "legacy-user").unwrap();

        assert!(store.token().is_none());
        assert_eq!(store.username().as_deref(), Some("legacy-user"));
        assert!(store.ensure_fresh().unwrap());
    }

    #[test]
    fn test_corrupted_file_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        let config = SessionConfig { file_path: Some(path), ttl_seconds: 3600 };
        let store = SessionStore::open(&config).unwrap();
        assert!(store.token().is_none());
    }
}
