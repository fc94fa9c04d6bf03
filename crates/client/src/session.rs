//! Session state and its on-disk store
//!
//! A [`Session`] is the bearer token plus the signed-in user, returned by
//! login. It is passed explicitly into every API call - nothing reads it
//! from ambient global state - which keeps the auth path visible and
//! testable. [`SessionStore`] persists it as JSON under the platform
//! config dir so the desktop app and the CLI share one sign-in.

use hosteldesk_core::{DeskError, DeskResult};
use hosteldesk_model::User;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ============================================================================
// Session
// ============================================================================

/// An authenticated session against the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token issued by `/users/login`
    pub token: String,
    /// The signed-in account
    pub user: User,
}

impl Session {
    /// The `Authorization` header value for this session
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Display name for the status bar / CLI prompt
    pub fn display_name(&self) -> &str {
        if self.user.name.is_empty() {
            &self.user.email
        } else {
            &self.user.name
        }
    }
}

// ============================================================================
// Session Store
// ============================================================================

/// Loads and saves the session file
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store at the default platform location
    /// (`<config dir>/hosteldesk/session.json`)
    pub fn new() -> DeskResult<Self> {
        let dir = dirs::config_dir()
            .ok_or_else(|| DeskError::internal("no platform config directory"))?
            .join("hosteldesk");
        Ok(Self {
            path: dir.join("session.json"),
        })
    }

    /// Store at an explicit path (tests, portable installs)
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Where the session file lives
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored session, if any.
    ///
    /// A missing file is simply "not signed in"; an unreadable file is
    /// treated the same way after a warning, so a corrupt store never
    /// locks the user out of the login page.
    pub fn load(&self) -> Option<Session> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!("discarding unreadable session file: {e}");
                None
            }
        }
    }

    /// Persist the session after a successful login
    pub fn save(&self, session: &Session) -> DeskResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DeskError::FileWrite {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }
        let raw = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, raw).map_err(|e| DeskError::FileWrite {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Remove the stored session (logout)
    pub fn clear(&self) -> DeskResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DeskError::FileWrite {
                path: self.path.clone(),
                message: e.to_string(),
            }),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use hosteldesk_core::RecordId;

    fn sample_session() -> Session {
        Session {
            token: "tok-123".to_string(),
            user: User {
                id: RecordId::new("u-1"),
                name: "Meera".to_string(),
                email: "meera@example.com".to_string(),
                role: "ADMIN".to_string(),
            },
        }
    }

    #[test]
    fn test_bearer_header() {
        assert_eq!(sample_session().bearer(), "Bearer tok-123");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut session = sample_session();
        assert_eq!(session.display_name(), "Meera");
        session.user.name.clear();
        assert_eq!(session.display_name(), "meera@example.com");
    }

    #[test]
    fn test_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("session.json"));
        assert!(store.load().is_none());

        store.save(&sample_session()).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, sample_session());

        store.clear().unwrap();
        assert!(store.load().is_none());
        // clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_corrupt_store_reads_as_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = SessionStore::at(&path);
        assert!(store.load().is_none());
    }
}
