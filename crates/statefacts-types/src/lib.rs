//! Shared type definitions for the US states fun-facts API.
//!
//! This crate is the single source of truth for the records that flow
//! between the reference dataset, the fact store, and the HTTP layer.
//!
//! # Modules
//!
//! - [`code`] -- Normalized two-letter state code
//! - [`structs`] -- Static state records, persisted fact documents, merged views
//! - [`filter`] -- The contiguous-states listing filter

pub mod code;
pub mod filter;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use code::StateCode;
pub use filter::{ContigFilter, NON_CONTIGUOUS_CODES};
pub use structs::{FactDocument, MergedState, StateRecord};
