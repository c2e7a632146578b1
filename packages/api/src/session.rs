//! Session lifecycle operations over the [`ApiClient`] and its cache.
//!
//! These are plain async functions with no UI dependency; the auth context in
//! the `ui` crate wraps them and mirrors their results into reactive state.

use store::User;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{LoginRequest, RegisterRequest};

/// Rehydrate the session at application start.
///
/// Reads the cached token and user; when both are present, revalidates the
/// token against the protected endpoint. On success the **cached** user is
/// returned rather than a freshly fetched profile — a stale name until the
/// next login is acceptable. On any validation failure the cache is cleared
/// and the session is anonymous. Without a complete cached pair no network
/// call is made.
pub async fn restore(api: &ApiClient) -> Option<User> {
    let cache = api.cache();
    let (Some(_token), Some(user)) = (cache.token(), cache.user()) else {
        return None;
    };

    match api.validate_token().await {
        Ok(()) => {
            tracing::debug!(user = %user.email, "session restored from cache");
            Some(user)
        }
        Err(error) => {
            tracing::warn!(%error, "cached token rejected, clearing session");
            cache.clear();
            None
        }
    }
}

/// Log in and persist the session. Token and user are written to the cache
/// before the user is returned; errors propagate untouched, nothing is
/// retried.
pub async fn login(api: &ApiClient, email: &str, password: &str) -> Result<User, ApiError> {
    let response = api
        .login(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await?;

    let cache = api.cache();
    cache.set_token(&response.token);
    cache.set_user(&response.user);
    Ok(response.user)
}

/// Register a new account, then immediately log in with the same credentials.
pub async fn register(
    api: &ApiClient,
    name: &str,
    email: &str,
    password: &str,
) -> Result<User, ApiError> {
    api.register(&RegisterRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    })
    .await?;

    login(api, email, password).await
}

/// Drop the session. Synchronous, cannot fail.
pub fn logout(api: &ApiClient) {
    api.cache().clear();
}
