//! Process-local fact store.
//!
//! Holds documents in a [`BTreeMap`] behind a Tokio [`RwLock`]. Used by
//! the HTTP tests and by the `memory` backend option; contents are lost
//! when the process exits.

use std::collections::BTreeMap;

use async_trait::async_trait;
use statefacts_types::{FactDocument, StateCode};
use tokio::sync::RwLock;

use crate::error::DbError;
use crate::store::FactStore;

/// In-memory [`FactStore`].
#[derive(Debug, Default)]
pub struct MemoryFactStore {
    docs: RwLock<BTreeMap<StateCode, FactDocument>>,
}

impl MemoryFactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `docs`.
    pub fn with_documents(docs: impl IntoIterator<Item = FactDocument>) -> Self {
        let map = docs
            .into_iter()
            .map(|doc| (doc.state_code.clone(), doc))
            .collect();
        Self {
            docs: RwLock::new(map),
        }
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.docs.read().await.len()
    }

    /// Whether no documents are stored.
    pub async fn is_empty(&self) -> bool {
        self.docs.read().await.is_empty()
    }
}

#[async_trait]
impl FactStore for MemoryFactStore {
    async fn find_all(&self) -> Result<Vec<FactDocument>, DbError> {
        Ok(self.docs.read().await.values().cloned().collect())
    }

    async fn find_one(&self, code: &StateCode) -> Result<Option<FactDocument>, DbError> {
        Ok(self.docs.read().await.get(code).cloned())
    }

    async fn save(&self, doc: &FactDocument) -> Result<(), DbError> {
        self.docs
            .write()
            .await
            .insert(doc.state_code.clone(), doc.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(code: &str, facts: &[&str]) -> FactDocument {
        FactDocument::new(
            StateCode::normalize(code),
            facts.iter().map(|f| (*f).to_owned()).collect(),
        )
    }

    #[tokio::test]
    async fn find_one_missing_is_none() {
        let store = MemoryFactStore::new();
        let found = store.find_one(&StateCode::normalize("KS")).await;
        assert!(matches!(found, Ok(None)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn save_then_find_one() {
        let store = MemoryFactStore::new();
        let ks = doc("KS", &["A", "B"]);
        assert!(store.save(&ks).await.is_ok());

        let found = store.find_one(&StateCode::normalize("KS")).await;
        assert_eq!(found.ok().flatten(), Some(ks));
    }

    #[tokio::test]
    async fn save_replaces_existing_document() {
        let store = MemoryFactStore::with_documents([doc("KS", &["A"])]);
        assert!(store.save(&doc("KS", &["B"])).await.is_ok());

        let found = store.find_one(&StateCode::normalize("KS")).await;
        assert_eq!(found.ok().flatten(), Some(doc("KS", &["B"])));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn find_all_returns_every_document() {
        let store = MemoryFactStore::with_documents([doc("KS", &["A"]), doc("OK", &["B"])]);
        let mut codes: Vec<String> = store
            .find_all()
            .await
            .unwrap_or_default()
            .into_iter()
            .map(|d| d.state_code.to_string())
            .collect();
        codes.sort();
        assert_eq!(codes, vec!["KS", "OK"]);
    }
}
