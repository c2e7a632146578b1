//! This crate contains all shared UI for the workspace: the auth and loader
//! contexts, the request executor, and the habit components used by the web
//! views.

use dioxus::prelude::*;

use api::ApiClient;

mod auth;
pub use auth::{use_auth, AuthProvider, AuthService, AuthState};

mod loader;
pub use loader::{use_loader, Loader, LoaderProvider, Loading};

mod request;
pub use request::{use_request, RequestOutcome, UseRequest};

mod habit_card;
pub use habit_card::HabitCard;

mod habit_form;
pub use habit_form::{HabitDraft, HabitForm};

mod filters;
pub use filters::HabitFiltersPanel;

pub mod validate;

/// The application-wide API client handle, provided once at the root.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}
