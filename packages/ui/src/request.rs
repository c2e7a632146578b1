//! Request executor: runs one API call, drives the global loading flag, and
//! converts failures into a display string.

use std::future::Future;

use api::ApiError;
use dioxus::prelude::*;

use crate::loader::{use_loader, Loading};

/// Explicit outcome of an executed request.
///
/// A tagged result rather than an empty-value sentinel, so operations whose
/// success carries no payload (delete) are not conflated with failure.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome<T> {
    Success(T),
    Failed(String),
}

impl<T> RequestOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, RequestOutcome::Success(_))
    }

    pub fn success(self) -> Option<T> {
        match self {
            RequestOutcome::Success(value) => Some(value),
            RequestOutcome::Failed(_) => None,
        }
    }
}

/// Executor handle bound to the global loading flag and a per-view error
/// slot. `Copy`, so it moves freely into event handlers.
#[derive(Clone, Copy)]
pub struct UseRequest {
    loading: Loading,
    error: Signal<Option<String>>,
}

impl UseRequest {
    /// The message of the last failed request, if any.
    pub fn error(&self) -> Option<String> {
        (self.error)()
    }

    pub fn clear_error(&self) {
        let mut error = self.error;
        error.set(None);
    }

    /// Run one unit of work. Clears the previous error, raises the loading
    /// flag, and lowers it again on both paths. Failures are swallowed into
    /// [`RequestOutcome::Failed`] with the message also stored in the error
    /// slot; nothing is re-thrown and nothing is retried.
    pub async fn run<T>(
        &self,
        work: impl Future<Output = Result<T, ApiError>>,
    ) -> RequestOutcome<T> {
        let mut error = self.error;
        error.set(None);
        self.loading.set(true);

        let outcome = match work.await {
            Ok(value) => RequestOutcome::Success(value),
            Err(failure) => {
                let message = failure.display_message();
                tracing::warn!(error = %failure, "request failed");
                error.set(Some(message.clone()));
                RequestOutcome::Failed(message)
            }
        };

        self.loading.set(false);
        outcome
    }
}

/// Executor for the current view.
pub fn use_request() -> UseRequest {
    UseRequest {
        loading: use_loader(),
        error: use_signal(|| None),
    }
}
