//! Shared application state for the API server.
//!
//! [`AppState`] holds the reference dataset and the fact store handle.
//! The dataset is immutable after startup and needs no locking; the
//! store is the only shared mutable resource.

use std::sync::Arc;

use statefacts_core::ReferenceDataset;
use statefacts_db::FactStore;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// The reference dataset loaded at startup.
    pub dataset: Arc<ReferenceDataset>,
    /// Gateway to persisted fun-fact documents.
    pub store: Arc<dyn FactStore>,
}

impl AppState {
    /// Create application state from a loaded dataset and a store backend.
    pub fn new(dataset: Arc<ReferenceDataset>, store: Arc<dyn FactStore>) -> Self {
        Self { dataset, store }
    }
}
