//! The REST client: one HTTP client for the whole application, with the
//! bearer-token request phase and the session-expiry response phase applied
//! to every call.

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use store::SessionCache;

use crate::error::{ApiError, ErrorBody};
use crate::models::{
    Habit, HabitEnvelope, HabitFilters, HabitListEnvelope, HabitPatch, HabitPayload, Health,
    LoginRequest, LoginResponse, ProfileEnvelope, RegisterRequest, RegisteredEnvelope, User,
};

/// Backend host used when no override is compiled in.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

fn configured_base_url() -> String {
    option_env!("HABITS_API_BASE_URL")
        .unwrap_or(DEFAULT_BASE_URL)
        .to_string()
}

/// Single point of HTTP communication with the backend.
///
/// Cloneable handle, constructed once at the application root and passed down
/// through context. Before every request the cached token, when present, is
/// attached as a bearer credential; there is no refresh logic, a stale token
/// is simply rejected by the server.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    cache: SessionCache,
}

impl ApiClient {
    pub fn new(cache: SessionCache) -> Self {
        Self::with_base_url(configured_base_url(), cache)
    }

    pub fn with_base_url(base_url: impl Into<String>, cache: SessionCache) -> Self {
        let base_url = base_url.into();
        tracing::debug!(%base_url, "api client configured");
        Self {
            http: reqwest::Client::new(),
            base_url,
            cache,
        }
    }

    pub fn cache(&self) -> &SessionCache {
        &self.cache
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.cache.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send one request through both interceptor phases.
    ///
    /// On an unauthorized response whose body carries one of the expiry
    /// markers, the session cache is cleared and the browser is sent back to
    /// the login page before the error is returned. Every other non-success
    /// response passes through to the caller unmodified.
    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = self.authorize(request).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let raw = response.text().await.unwrap_or_default();
        let body = ErrorBody::parse(&raw);
        if status == StatusCode::UNAUTHORIZED && body.signals_expired_session() {
            tracing::warn!(error = ?body.error, "session token rejected, forcing logout");
            self.cache.clear();
            redirect_to_login();
        }

        Err(ApiError::Server {
            status: status.as_u16(),
            body,
        })
    }

    async fn json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        Ok(self.send(request).await?.json().await?)
    }

    // Authentication endpoints

    pub async fn register(&self, request: &RegisterRequest) -> Result<User, ApiError> {
        let envelope: RegisteredEnvelope = self
            .json(self.http.post(self.url("/api/register")).json(request))
            .await?;
        Ok(envelope.user)
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.json(self.http.post(self.url("/api/login")).json(request))
            .await
    }

    pub async fn profile(&self) -> Result<User, ApiError> {
        let envelope: ProfileEnvelope = self.json(self.http.get(self.url("/api/profile"))).await?;
        Ok(envelope.user)
    }

    /// Probe the protected endpoint to check that the cached token is still
    /// accepted. The response body is discarded.
    pub async fn validate_token(&self) -> Result<(), ApiError> {
        self.send(self.http.get(self.url("/api/protected"))).await?;
        Ok(())
    }

    // Habit endpoints

    pub async fn create_habit(&self, payload: &HabitPayload) -> Result<Habit, ApiError> {
        let envelope: HabitEnvelope = self
            .json(self.http.post(self.url("/api/habits")).json(payload))
            .await?;
        Ok(envelope.habit)
    }

    pub async fn list_habits(&self, filters: &HabitFilters) -> Result<Vec<Habit>, ApiError> {
        let mut request = self.http.get(self.url("/api/habits"));
        if !filters.is_empty() {
            request = request.query(&filters.to_query());
        }
        let envelope: HabitListEnvelope = self.json(request).await?;
        Ok(envelope.habits)
    }

    pub async fn get_habit(&self, id: &str) -> Result<Habit, ApiError> {
        self.json(self.http.get(self.url(&format!("/api/habits/{id}"))))
            .await
    }

    /// Full replace of an existing habit.
    pub async fn update_habit(&self, id: &str, payload: &HabitPayload) -> Result<Habit, ApiError> {
        let envelope: HabitEnvelope = self
            .json(
                self.http
                    .put(self.url(&format!("/api/habits/{id}")))
                    .json(payload),
            )
            .await?;
        Ok(envelope.habit)
    }

    /// Partial update; only the fields present in the patch are sent.
    pub async fn patch_habit(&self, id: &str, patch: &HabitPatch) -> Result<Habit, ApiError> {
        let envelope: HabitEnvelope = self
            .json(
                self.http
                    .patch(self.url(&format!("/api/habits/{id}")))
                    .json(patch),
            )
            .await?;
        Ok(envelope.habit)
    }

    pub async fn delete_habit(&self, id: &str) -> Result<(), ApiError> {
        self.send(self.http.delete(self.url(&format!("/api/habits/{id}"))))
            .await?;
        Ok(())
    }

    // Utility endpoints

    pub async fn health(&self) -> Result<Health, ApiError> {
        self.json(self.http.get(self.url("/health"))).await
    }
}

#[cfg(target_arch = "wasm32")]
fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn redirect_to_login() {}
