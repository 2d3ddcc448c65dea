//! Process-wide session marker, persisted behind an injectable store.
//!
//! The marker records two things: the authenticated email (`userEmail`,
//! the sole source of truth for "is logged in") and a best-effort cached
//! display name (`userName`). Logging out clears both together.

pub mod file;
pub mod store;

pub use self::file::FileStore;
pub use self::store::{MemoryStore, SessionStore, USER_EMAIL, USER_NAME};

use crate::account::AccountClient;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Facade over the session store shared by flows and hosts.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    #[must_use]
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Record `email` as the authenticated user.
    pub fn set_session(&self, email: &str) {
        self.store.set(USER_EMAIL, email);
    }

    /// Log out: remove the marker and the cached display name together.
    pub fn clear_session(&self) {
        self.store.remove(USER_EMAIL);
        self.store.remove(USER_NAME);
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.store.get(USER_EMAIL).is_some()
    }

    #[must_use]
    pub fn email(&self) -> Option<String> {
        self.store.get(USER_EMAIL)
    }

    /// Cached display name. Never fetches.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        self.store.get(USER_NAME)
    }

    /// Fetch and cache the display name in the background.
    ///
    /// Runs only when a session exists and no name is cached yet. Lookup
    /// failures are logged, never surfaced and never retried. Dropping the
    /// returned handle cancels the fetch; [`NamePrefetch::join`] waits for
    /// it instead.
    #[must_use]
    pub fn refresh_display_name(&self, client: &AccountClient) -> Option<NamePrefetch> {
        if self.display_name().is_some() {
            return None;
        }

        let email = self.email()?;
        let session = self.clone();
        let client = client.clone();

        let handle = tokio::spawn(async move {
            match client.username(&email).await {
                Ok(name) => session.store.set(USER_NAME, &name),
                Err(err) => debug!(error = %err, "display name lookup failed"),
            }
        });

        Some(NamePrefetch {
            handle: Some(handle),
        })
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("email", &self.email())
            .field("display_name", &self.display_name())
            .finish()
    }
}

/// Handle on an in-flight display-name fetch. Aborts the task when
/// dropped, so no cache write lands after teardown.
#[derive(Debug)]
pub struct NamePrefetch {
    handle: Option<JoinHandle<()>>,
}

impl NamePrefetch {
    /// Wait for the fetch to finish, success or not.
    pub async fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for NamePrefetch {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
