//! Authentication context and hooks for the UI.

use api::{session, ApiClient, ApiError};
use dioxus::prelude::*;
use store::User;

/// Authentication state for the application.
///
/// Starts `unknown` (`loading = true`); after the startup restore resolves it
/// is either authenticated (`user` set) or anonymous, and `loading` stays
/// false for the rest of the session.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Session manager handle: the reactive auth state plus the operations that
/// transition it. Cloneable; obtained with [`use_auth`].
#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
    state: Signal<AuthState>,
}

impl AuthService {
    pub fn state(&self) -> AuthState {
        (self.state)()
    }

    pub fn user(&self) -> Option<User> {
        self.state().user
    }

    pub fn is_authenticated(&self) -> bool {
        self.state().is_authenticated()
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let user = session::login(&self.api, email, password).await?;
        let mut state = self.state;
        state.set(AuthState {
            user: Some(user),
            loading: false,
        });
        Ok(())
    }

    /// Register and auto-login with the same credentials.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<(), ApiError> {
        let user = session::register(&self.api, name, email, password).await?;
        let mut state = self.state;
        state.set(AuthState {
            user: Some(user),
            loading: false,
        });
        Ok(())
    }

    /// Synchronous; cannot fail. Route guards take care of the redirect.
    pub fn logout(&self) {
        session::logout(&self.api);
        let mut state = self.state;
        state.set(AuthState {
            user: None,
            loading: false,
        });
    }
}

/// Get the session manager for the current app.
pub fn use_auth() -> AuthService {
    use_context::<AuthService>()
}

/// Provider component that owns the authentication state.
/// Wrap the router with this component; it restores the cached session once
/// at startup before any guarded route resolves.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let api = use_context::<ApiClient>();
    let state = use_signal(AuthState::default);
    let service = use_context_provider(move || AuthService { api, state });

    let _restore = use_resource(move || {
        let service = service.clone();
        async move {
            let user = session::restore(&service.api).await;
            let mut state = service.state;
            state.set(AuthState {
                user,
                loading: false,
            });
        }
    });

    rsx! {
        {children}
    }
}
