//! Domain logic for the US states fun-facts API.
//!
//! Nothing in this crate performs I/O against the fact store. Handlers in
//! `statefacts-api` compose these pieces with store round trips.
//!
//! # Modules
//!
//! - [`dataset`] -- The immutable reference dataset and its lookups
//! - [`funfacts`] -- Payload schemas and index-based edit rules
//! - [`format`] -- Presentation helpers for projected fields
//! - [`config`] -- YAML configuration with environment overrides

pub mod config;
pub mod dataset;
pub mod format;
pub mod funfacts;

pub use config::{AppConfig, ConfigError, StoreBackend};
pub use dataset::{DatasetError, ReferenceDataset};
pub use funfacts::{AddFunFacts, DeleteFunFact, PayloadError, UpdateFunFact};
