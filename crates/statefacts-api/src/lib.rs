//! HTTP API for US state reference data and user-editable fun facts.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Read endpoints** merging the static reference dataset with
//!   persisted fun facts (`/states`, `/states/{state}`)
//! - **Projection endpoints** returning one static field per state
//!   (capital, nickname, population, admission date)
//! - **Fun-fact endpoints** to read a random fact and to add, update,
//!   or delete facts by 1-based index
//! - **Minimal HTML pages** for `GET /` and for unmatched routes
//!
//! # Architecture
//!
//! Every `/states/{state}...` route runs the [`validator::verify_state`]
//! middleware first. It resolves the path code against the reference
//! dataset and either rejects the request or hands the handler a
//! [`validator::VerifiedState`], so handlers never see an unknown code.
//! The fact store is reached only through the
//! [`FactStore`](statefacts_db::FactStore) trait.

pub mod error;
pub mod handlers;
pub mod pages;
pub mod router;
pub mod server;
pub mod state;
pub mod validator;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::AppState;
