//! `localStorage`-backed session storage for the web platform.
//!
//! A zero-size struct that looks up `window.localStorage` on every operation,
//! the same way the IndexedDB layer reopens its connection per call: the
//! browser caches the handle, and holding no state keeps the type trivially
//! `Clone + Send + Sync`. When the storage area is unavailable (disabled,
//! private mode quirks) reads return `None` and writes are dropped.

use crate::StorageBackend;

/// Browser `localStorage` backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = storage() else {
            return;
        };
        let _ = storage.set_item(key, value);
    }

    fn remove(&self, key: &str) {
        let Some(storage) = storage() else {
            return;
        };
        let _ = storage.remove_item(key);
    }
}
