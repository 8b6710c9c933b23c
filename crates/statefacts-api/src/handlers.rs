//! REST API endpoint handlers.
//!
//! Handlers behind `/states/{state}` receive a [`VerifiedState`] from the
//! validator middleware and never re-check the code. Projection handlers
//! do not take the application state at all, so they cannot reach the
//! fact store.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/states`, `/states/` | List states (`?contig=true\|false`) |
//! | `GET` | `/states/{state}` | Single state merged with fun facts |
//! | `GET` | `/states/{state}/capital` | Capital city |
//! | `GET` | `/states/{state}/nickname` | Nickname |
//! | `GET` | `/states/{state}/population` | Population (grouped digits) |
//! | `GET` | `/states/{state}/admission` | Admission date |
//! | `GET` | `/states/{state}/funfact` | One random fun fact |
//! | `POST` | `/states/{state}/funfact` | Append fun facts |
//! | `PATCH` | `/states/{state}/funfact` | Replace fun fact at index |
//! | `DELETE` | `/states/{state}/funfact` | Remove fun fact at index |

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Extension, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;
use statefacts_core::format::format_population;
use statefacts_core::funfacts::{self, AddFunFacts, DeleteFunFact, UpdateFunFact};
use statefacts_types::{ContigFilter, FactDocument, MergedState, StateCode};

use crate::error::ApiError;
use crate::state::AppState;
use crate::validator::VerifiedState;

// ---------------------------------------------------------------------------
// GET /states -- list states
// ---------------------------------------------------------------------------

/// List states in dataset order, each merged with its fun facts.
///
/// `contig=true` keeps the contiguous 48 and `contig=false` keeps Alaska
/// and Hawaii. Any other value, or a repeated parameter beyond its first
/// occurrence, does not change the result. Performs one full-collection
/// fetch from the fact store per call.
pub async fn list_states(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, ApiError> {
    let contig = params
        .iter()
        .find(|(key, _)| key == "contig")
        .map(|(_, value)| value.as_str());
    let filter = ContigFilter::from_query(contig);

    let stored: HashMap<StateCode, FactDocument> = state
        .store
        .find_all()
        .await?
        .into_iter()
        .map(|doc| (doc.state_code.clone(), doc))
        .collect();

    let merged: Vec<MergedState> = state
        .dataset
        .filter(filter)
        .map(|record| MergedState::merge(record.clone(), stored.get(&record.code)))
        .collect();

    Ok(Json(merged))
}

// ---------------------------------------------------------------------------
// GET /states/{state} -- single state
// ---------------------------------------------------------------------------

/// Return one state merged with its fun facts.
pub async fn get_state(
    State(state): State<Arc<AppState>>,
    Extension(verified): Extension<VerifiedState>,
) -> Result<impl IntoResponse, ApiError> {
    let doc = state.store.find_one(&verified.code).await?;
    Ok(Json(MergedState::merge(verified.record, doc.as_ref())))
}

// ---------------------------------------------------------------------------
// GET /states/{state}/<field> -- static projections
// ---------------------------------------------------------------------------

/// Return `{ state, capital }`.
pub async fn get_capital(Extension(verified): Extension<VerifiedState>) -> impl IntoResponse {
    let record = verified.record;
    Json(serde_json::json!({
        "state": record.name,
        "capital": record.capital,
    }))
}

/// Return `{ state, nickname }`.
pub async fn get_nickname(Extension(verified): Extension<VerifiedState>) -> impl IntoResponse {
    let record = verified.record;
    Json(serde_json::json!({
        "state": record.name,
        "nickname": record.nickname,
    }))
}

/// Return `{ state, population }` with the population as a grouped
/// string such as `"2,937,880"`.
pub async fn get_population(Extension(verified): Extension<VerifiedState>) -> impl IntoResponse {
    let record = verified.record;
    Json(serde_json::json!({
        "state": record.name,
        "population": format_population(record.population),
    }))
}

/// Return `{ state, admitted }`.
pub async fn get_admission(Extension(verified): Extension<VerifiedState>) -> impl IntoResponse {
    let record = verified.record;
    Json(serde_json::json!({
        "state": record.name,
        "admitted": record.admission_date,
    }))
}

// ---------------------------------------------------------------------------
// /states/{state}/funfact
// ---------------------------------------------------------------------------

/// Return `{ funfact }` chosen uniformly from the stored facts.
pub async fn get_random_funfact(
    State(state): State<Arc<AppState>>,
    Extension(verified): Extension<VerifiedState>,
) -> Result<impl IntoResponse, ApiError> {
    let doc = stored_facts(&state, &verified).await?;
    let funfact = funfacts::pick_random(&doc).ok_or_else(|| no_fun_facts(&verified))?;
    Ok(Json(serde_json::json!({ "funfact": funfact })))
}

/// Append fun facts, creating the document on first use.
///
/// Responds `201 Created` with the full updated document.
pub async fn add_funfacts(
    State(state): State<Arc<AppState>>,
    Extension(verified): Extension<VerifiedState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let payload = AddFunFacts::from_payload(&parse_body(&body)?)?;
    let added = payload.funfacts.len();

    let doc = match state.store.find_one(&verified.code).await? {
        Some(mut existing) => {
            funfacts::append(&mut existing, payload.funfacts);
            existing
        }
        None => FactDocument::new(verified.code.clone(), payload.funfacts),
    };
    state.store.save(&doc).await?;

    tracing::info!(
        state_code = %verified.code,
        added,
        total = doc.funfacts.len(),
        "fun facts added"
    );
    Ok((StatusCode::CREATED, Json(doc)))
}

/// Replace the fun fact at a 1-based `index`.
pub async fn update_funfact(
    State(state): State<Arc<AppState>>,
    Extension(verified): Extension<VerifiedState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let payload = UpdateFunFact::from_payload(&parse_body(&body)?)?;

    let mut doc = stored_facts(&state, &verified).await?;
    if !funfacts::replace_at(&mut doc, payload.index, payload.funfact) {
        return Err(index_out_of_range(&verified));
    }
    state.store.save(&doc).await?;

    tracing::info!(
        state_code = %verified.code,
        index = payload.index,
        "fun fact updated"
    );
    Ok(Json(doc))
}

/// Remove the fun fact at a 1-based `index`.
pub async fn delete_funfact(
    State(state): State<Arc<AppState>>,
    Extension(verified): Extension<VerifiedState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let payload = DeleteFunFact::from_payload(&parse_body(&body)?)?;

    let mut doc = stored_facts(&state, &verified).await?;
    if funfacts::remove_at(&mut doc, payload.index).is_none() {
        return Err(index_out_of_range(&verified));
    }
    state.store.save(&doc).await?;

    tracing::info!(
        state_code = %verified.code,
        index = payload.index,
        remaining = doc.funfacts.len(),
        "fun fact deleted"
    );
    Ok(Json(doc))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fetch the state's document, treating a missing or empty one as
/// [`ApiError::NoFunFacts`].
async fn stored_facts(
    state: &AppState,
    verified: &VerifiedState,
) -> Result<FactDocument, ApiError> {
    match state.store.find_one(&verified.code).await? {
        Some(doc) if !doc.is_empty() => Ok(doc),
        _ => Err(no_fun_facts(verified)),
    }
}

fn no_fun_facts(verified: &VerifiedState) -> ApiError {
    ApiError::NoFunFacts {
        state: verified.record.name.clone(),
    }
}

fn index_out_of_range(verified: &VerifiedState) -> ApiError {
    ApiError::IndexOutOfRange {
        state: verified.record.name.clone(),
    }
}

/// Parse a JSON request body. An empty body reads as `null`, which the
/// payload schemas report as missing fields.
fn parse_body(body: &Bytes) -> Result<Value, ApiError> {
    if body.is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|e| ApiError::MalformedBody(e.to_string()))
}
