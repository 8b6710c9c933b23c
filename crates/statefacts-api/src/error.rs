//! Error types for the HTTP layer.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.
//!
//! # Status policy
//!
//! | Kind | Status |
//! |------|--------|
//! | `InvalidStateCode` | 400 |
//! | `MissingFunFacts`, `NotAnArray`, `MissingField`, `MalformedBody` | 400 |
//! | `NoFunFacts`, `IndexOutOfRange` | 404 |
//! | `StoreError` | 500 |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use statefacts_core::PayloadError;
use statefacts_db::DbError;

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The path code does not match any state in the reference dataset.
    #[error("Invalid state abbreviation parameter")]
    InvalidStateCode,

    /// An add request carried no fun facts.
    #[error("State fun facts value required")]
    MissingFunFacts,

    /// An add request carried `funfacts` that is not an array of strings.
    #[error("State fun facts value must be an array")]
    NotAnArray,

    /// An update or delete request lacked a required field.
    #[error("{0}")]
    MissingField(String),

    /// The request body is not valid JSON.
    #[error("Request body must be valid JSON: {0}")]
    MalformedBody(String),

    /// The state has no stored fun facts.
    #[error("No Fun Facts found for {state}")]
    NoFunFacts {
        /// Full name of the state.
        state: String,
    },

    /// The 1-based index does not address a stored fun fact.
    #[error("No Fun Fact found at that index for {state}")]
    IndexOutOfRange {
        /// Full name of the state.
        state: String,
    },

    /// The fact store failed.
    #[error("fact store error: {0}")]
    Store(#[from] DbError),
}

impl ApiError {
    /// Stable machine-readable name of the error kind.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidStateCode => "InvalidStateCode",
            Self::MissingFunFacts => "MissingFunFacts",
            Self::NotAnArray => "NotAnArray",
            Self::MissingField(_) => "MissingField",
            Self::MalformedBody(_) => "MalformedBody",
            Self::NoFunFacts { .. } => "NoFunFacts",
            Self::IndexOutOfRange { .. } => "IndexOutOfRange",
            Self::Store(_) => "StoreError",
        }
    }

    /// HTTP status for this error.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidStateCode
            | Self::MissingFunFacts
            | Self::NotAnArray
            | Self::MissingField(_)
            | Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::NoFunFacts { .. } | Self::IndexOutOfRange { .. } => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<PayloadError> for ApiError {
    fn from(err: PayloadError) -> Self {
        match err {
            PayloadError::MissingFunFacts => Self::MissingFunFacts,
            PayloadError::NotAnArray => Self::NotAnArray,
            PayloadError::MissingIndex | PayloadError::MissingFunFact => {
                Self::MissingField(err.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Store(e) => {
                // Store internals stay in the log.
                tracing::error!(error = %e, "fact store operation failed");
                String::from("Server error")
            }
            other => other.to_string(),
        };

        let body = serde_json::json!({
            "message": message,
            "kind": self.kind(),
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
