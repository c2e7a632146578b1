use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::StorageBackend;

/// In-memory storage backend for tests and native builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SessionCache, User};

    fn sample_user() -> User {
        User {
            id: "u-1".to_string(),
            name: "Maria".to_string(),
            email: "maria@example.com".to_string(),
            created_at: "2024-01-10T12:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn empty_cache_reads_nothing() {
        let cache = SessionCache::new(MemoryStorage::new());
        assert!(cache.token().is_none());
        assert!(cache.user().is_none());
    }

    #[test]
    fn token_round_trip() {
        let cache = SessionCache::new(MemoryStorage::new());
        cache.set_token("abc123");
        assert_eq!(cache.token().as_deref(), Some("abc123"));
    }

    #[test]
    fn user_round_trip() {
        let cache = SessionCache::new(MemoryStorage::new());
        let user = sample_user();
        cache.set_user(&user);
        assert_eq!(cache.user(), Some(user));
    }

    #[test]
    fn clear_drops_both_entries() {
        let cache = SessionCache::new(MemoryStorage::new());
        cache.set_token("abc123");
        cache.set_user(&sample_user());

        cache.clear();

        assert!(cache.token().is_none());
        assert!(cache.user().is_none());
    }

    #[test]
    fn corrupt_user_json_reads_as_empty() {
        let backend = MemoryStorage::new();
        backend.set("habitos.user", "{not json");
        let cache = SessionCache::new(backend);
        assert!(cache.user().is_none());
    }

    #[test]
    fn cloned_handles_share_the_same_store() {
        let cache = SessionCache::new(MemoryStorage::new());
        let other = cache.clone();
        cache.set_token("shared");
        assert_eq!(other.token().as_deref(), Some("shared"));
    }
}
