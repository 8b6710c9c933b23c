//! State code validation middleware.
//!
//! [`verify_state`] runs before every handler that takes a `{state}` path
//! segment. It uppercases the segment, looks it up in the reference
//! dataset, and either short-circuits with
//! [`ApiError::InvalidStateCode`] or stores a [`VerifiedState`] in the
//! request extensions for the handler to pick up.

use std::sync::Arc;

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use statefacts_types::{StateCode, StateRecord};

use crate::error::ApiError;
use crate::state::AppState;

/// A state code that has been resolved against the reference dataset.
#[derive(Debug, Clone)]
pub struct VerifiedState {
    /// The normalized (uppercase) code.
    pub code: StateCode,
    /// The matching reference record.
    pub record: StateRecord,
}

/// Resolve the `{state}` path segment or reject the request.
///
/// A segment that cannot be decoded (for example `%FF`, which is not
/// UTF-8) is rejected the same way as an unknown code.
pub async fn verify_state(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Path(raw) = path.map_err(|e| {
        tracing::debug!(error = %e, "rejected undecodable state segment");
        ApiError::InvalidStateCode
    })?;
    let Some(record) = state.dataset.resolve(&raw) else {
        tracing::debug!(state = %raw, "rejected unknown state code");
        return Err(ApiError::InvalidStateCode);
    };

    request.extensions_mut().insert(VerifiedState {
        code: record.code.clone(),
        record: record.clone(),
    });
    Ok(next.run(request).await)
}
