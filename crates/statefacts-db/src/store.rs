//! The fact store gateway trait.

use async_trait::async_trait;
use statefacts_types::{FactDocument, StateCode};

use crate::error::DbError;

/// Access to persisted fun-fact documents keyed by state code.
///
/// Implementations do not check that a code exists in the reference
/// dataset; callers validate codes before reaching the store.
#[async_trait]
pub trait FactStore: Send + Sync + 'static {
    /// Fetch every stored document, in no particular order.
    async fn find_all(&self) -> Result<Vec<FactDocument>, DbError>;

    /// Fetch the document for `code`, if one has ever been saved.
    async fn find_one(&self, code: &StateCode) -> Result<Option<FactDocument>, DbError>;

    /// Create or fully replace the document for `doc.state_code`.
    async fn save(&self, doc: &FactDocument) -> Result<(), DbError>;
}
