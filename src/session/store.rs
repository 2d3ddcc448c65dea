//! Injectable key/value storage behind the session marker.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Store key holding the authenticated email.
pub const USER_EMAIL: &str = "userEmail";

/// Store key holding the cached display name.
pub const USER_NAME: &str = "userName";

/// String key/value storage with infallible calls and last-write-wins
/// semantics. Implementations are shared by reference across tasks.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store. Test double, also the fallback when persistence is
/// not wanted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.lock().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.lock().remove(key);
    }
}
