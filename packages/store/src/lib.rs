//! # Session cache — client-side persistence for the auth session
//!
//! Persists the bearer token and the user profile across page reloads so the
//! application can rehydrate its session at startup. On the web platform the
//! data lives in the browser's `localStorage`; native builds and tests use an
//! in-memory backend with the same semantics.
//!
//! | Key | Value |
//! |-----|-------|
//! | `habitos.token` | opaque bearer token, stored as-is |
//! | `habitos.user` | [`User`] serialised as JSON |
//!
//! The two entries are always cleared together, never independently. All
//! operations are best-effort: an unavailable or corrupted store degrades to
//! "no session" rather than crashing the app.

use std::sync::Arc;

#[cfg(target_arch = "wasm32")]
mod local;
pub mod models;
mod memory;

#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;
pub use memory::MemoryStorage;
pub use models::User;

const TOKEN_KEY: &str = "habitos.token";
const USER_KEY: &str = "habitos.user";

/// Raw string key-value store backing the session cache.
///
/// Implementations must not panic: reads return `None` and writes silently do
/// nothing when the underlying store is unavailable.
pub trait StorageBackend: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Cloneable handle over the persisted session state.
#[derive(Clone)]
pub struct SessionCache {
    backend: Arc<dyn StorageBackend>,
}

impl SessionCache {
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// The backend for the current platform: `localStorage` on the web, an
    /// in-memory map everywhere else.
    pub fn platform() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(LocalStorage)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::new(MemoryStorage::new())
        }
    }

    pub fn token(&self) -> Option<String> {
        self.backend.get(TOKEN_KEY)
    }

    pub fn set_token(&self, token: &str) {
        self.backend.set(TOKEN_KEY, token);
    }

    /// The cached user profile. Corrupted JSON reads as no user.
    pub fn user(&self) -> Option<User> {
        let raw = self.backend.get(USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    pub fn set_user(&self, user: &User) {
        if let Ok(serialised) = serde_json::to_string(user) {
            self.backend.set(USER_KEY, &serialised);
        }
    }

    /// Drop both entries. Token and user are never cleared independently.
    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
    }
}
