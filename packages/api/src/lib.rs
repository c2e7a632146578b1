//! # API crate — REST client for the habits backend
//!
//! Everything the frontends need to talk to the remote server: the wire
//! models, the typed error schema, the configured HTTP client with its two
//! interceptor phases, and the session lifecycle built on top of them.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: base URL configuration, bearer-token request phase, 401 session-expiry response phase, one thin method per endpoint |
//! | [`error`] | [`ApiError`] taxonomy and the [`ErrorBody`](error::ErrorBody) schema validated at the boundary |
//! | [`models`] | `User`, `Habit`, `Frequency`, request payloads, filters, response envelopes |
//! | [`session`] | login / register / logout / restore over the client and its cache |
//!
//! The client holds a [`store::SessionCache`] handle; the same cache backs
//! both the bearer interceptor and session rehydration, so a forced logout in
//! the response phase is immediately visible everywhere.

pub mod client;
pub mod error;
pub mod models;
pub mod session;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::{ApiError, GENERIC_ERROR_MESSAGE};
pub use models::{
    Frequency, Habit, HabitFilters, HabitPatch, HabitPayload, Health, LoginRequest, LoginResponse,
    RegisterRequest, User,
};
