//! Error taxonomy for the REST client.
//!
//! The server reports failures as a small JSON body with an `error` field and
//! sometimes a broader `message`. [`ErrorBody`] is that schema, validated at
//! the client boundary: unrecognized shapes deserialise to both fields empty,
//! which downstream code treats as "unclassified" and renders with the fixed
//! default message.

use serde::Deserialize;
use thiserror::Error;

/// Shown whenever the server gave us nothing displayable.
pub const GENERIC_ERROR_MESSAGE: &str = "Ocorreu um erro inesperado";

/// Server marker for a token past its expiry.
pub const EXPIRED_TOKEN_MARKER: &str = "Token expirado";
/// Server marker for a request that should have carried a token but did not.
pub const MISSING_TOKEN_MARKER: &str = "Token de acesso não fornecido";

/// Structured error payload returned by the server on non-success responses.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Parse a raw response body. Anything that is not the recognized shape
    /// (HTML error pages, empty bodies) degrades to an empty `ErrorBody`.
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    /// Whether this body carries one of the two markers the server uses to
    /// signal that the session token is expired or missing.
    pub fn signals_expired_session(&self) -> bool {
        matches!(
            self.error.as_deref(),
            Some(EXPIRED_TOKEN_MARKER) | Some(MISSING_TOKEN_MARKER)
        )
    }
}

/// Failure of a single API call. No call is retried; every error is terminal
/// for that attempt.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("server returned status {status}")]
    Server { status: u16, body: ErrorBody },
}

impl ApiError {
    /// HTTP status of the response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            ApiError::Transport(_) => None,
        }
    }

    /// The single human-readable sentence surfaced to the UI: the server's
    /// `error` field, else its `message`, else the generic default.
    pub fn display_message(&self) -> String {
        match self {
            ApiError::Server { body, .. } => body
                .error
                .clone()
                .or_else(|| body.message.clone())
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
            ApiError::Transport(_) => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_recognized_error_shape() {
        let body = ErrorBody::parse(r#"{"error":"Hábito não encontrado"}"#);
        assert_eq!(body.error.as_deref(), Some("Hábito não encontrado"));
        assert!(body.message.is_none());
    }

    #[test]
    fn unrecognized_shapes_degrade_to_empty() {
        assert_eq!(ErrorBody::parse(""), ErrorBody::default());
        assert_eq!(ErrorBody::parse("<html>boom</html>"), ErrorBody::default());
        assert_eq!(ErrorBody::parse(r#"{"code":500}"#), ErrorBody::default());
    }

    #[test]
    fn expired_session_markers() {
        let expired = ErrorBody::parse(r#"{"error":"Token expirado"}"#);
        assert!(expired.signals_expired_session());

        let missing = ErrorBody::parse(r#"{"error":"Token de acesso não fornecido"}"#);
        assert!(missing.signals_expired_session());

        let other = ErrorBody::parse(r#"{"error":"Credenciais inválidas"}"#);
        assert!(!other.signals_expired_session());

        assert!(!ErrorBody::default().signals_expired_session());
    }

    #[test]
    fn display_message_prefers_error_then_message_then_default() {
        let both = ApiError::Server {
            status: 400,
            body: ErrorBody {
                error: Some("campo inválido".to_string()),
                message: Some("ignorado".to_string()),
            },
        };
        assert_eq!(both.display_message(), "campo inválido");

        let message_only = ApiError::Server {
            status: 400,
            body: ErrorBody {
                error: None,
                message: Some("detalhe do servidor".to_string()),
            },
        };
        assert_eq!(message_only.display_message(), "detalhe do servidor");

        let empty = ApiError::Server {
            status: 500,
            body: ErrorBody::default(),
        };
        assert_eq!(empty.display_message(), GENERIC_ERROR_MESSAGE);
    }
}
