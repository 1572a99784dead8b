//! Error types for the gateway.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

/// Gateway error taxonomy.
///
/// `Client` maps to HTTP 400 with the message in the body. Every other
/// variant is an internal failure: it maps to HTTP 500 with a minimal body
/// while the full detail is logged server-side.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Bad or missing input, or unconfigured credentials.
    #[error("{0}")]
    Client(String),

    /// Transport-level failure talking to an upstream tracker.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Credential store I/O failure.
    #[error("credential store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization failure outside of request validation.
    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a client error from any message.
    pub fn client(message: impl Into<String>) -> Self {
        Self::Client(message.into())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::Client(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            other => {
                error!(error = %other, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
