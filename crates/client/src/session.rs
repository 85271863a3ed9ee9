//! Session collaborators.
//!
//! The flows never reach into ambient state: the shared user store and the
//! persisted session record are injected behind these traits. The
//! in-memory implementation backs tests and headless use.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::api::types::UserProfile;

/// Fixed key under which the session record is persisted.
pub const SESSION_STORAGE_KEY: &str = "codiit-user-storage";

/// Shared cross-flow user state.
pub trait SessionStore {
    /// The currently cached user, if logged in.
    fn current_user(&self) -> Option<UserProfile>;

    /// Replace the cached user wholesale (no partial merge).
    fn replace_user(&self, user: UserProfile);

    /// Clear the in-memory session (log out).
    fn logout(&self);
}

/// Locally persisted session records, keyed by storage key.
pub trait PersistedSession {
    /// Remove the record stored under `key`, if any.
    fn remove(&self, key: &str);
}

/// In-memory session store.
#[derive(Debug, Default)]
pub struct MemorySession {
    user: Mutex<Option<UserProfile>>,
    records: Mutex<HashMap<String, String>>,
}

impl MemorySession {
    /// Create an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session already logged in as `user`, with a persisted
    /// record under the fixed storage key.
    #[must_use]
    pub fn logged_in(user: UserProfile) -> Self {
        let session = Self::new();
        session.persist(SESSION_STORAGE_KEY, "{}");
        session.replace_user(user);
        session
    }

    /// Store a persisted record.
    pub fn persist(&self, key: &str, value: &str) {
        if let Ok(mut records) = self.records.lock() {
            records.insert(key.to_owned(), value.to_owned());
        }
    }

    /// Whether a persisted record exists under `key`.
    #[must_use]
    pub fn has_record(&self, key: &str) -> bool {
        self.records
            .lock()
            .map(|records| records.contains_key(key))
            .unwrap_or(false)
    }
}

impl SessionStore for MemorySession {
    fn current_user(&self) -> Option<UserProfile> {
        self.user.lock().ok().and_then(|user| user.clone())
    }

    fn replace_user(&self, user: UserProfile) {
        if let Ok(mut slot) = self.user.lock() {
            *slot = Some(user);
        }
    }

    fn logout(&self) {
        if let Ok(mut slot) = self.user.lock() {
            *slot = None;
        }
    }
}

impl PersistedSession for MemorySession {
    fn remove(&self, key: &str) {
        if let Ok(mut records) = self.records.lock() {
            records.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codiit_core::UserId;

    fn user() -> UserProfile {
        UserProfile {
            id: UserId::new(1),
            email: "buyer@codiit.example".to_string(),
            name: "구매자".to_string(),
            image_url: None,
        }
    }

    #[test]
    fn test_logged_in_session_has_user_and_record() {
        let session = MemorySession::logged_in(user());
        assert_eq!(session.current_user().map(|u| u.name), Some("구매자".to_string()));
        assert!(session.has_record(SESSION_STORAGE_KEY));
    }

    #[test]
    fn test_logout_clears_only_memory_state() {
        let session = MemorySession::logged_in(user());
        session.logout();
        assert!(session.current_user().is_none());
        // The persisted record is removed separately by the withdrawal flow.
        assert!(session.has_record(SESSION_STORAGE_KEY));
    }

    #[test]
    fn test_remove_drops_persisted_record() {
        let session = MemorySession::logged_in(user());
        session.remove(SESSION_STORAGE_KEY);
        assert!(!session.has_record(SESSION_STORAGE_KEY));
    }
}
