//! `Dragonfly` (Redis-compatible) fact store backend.
//!
//! # Key Patterns
//!
//! | Pattern | Type | Description |
//! |---------|------|-------------|
//! | `state:{code}:facts` | JSON | Serialized [`FactDocument`] |
//! | `states:with_facts` | Set | Codes that have a stored document |
//!
//! The index set lets [`FactStore::find_all`] fetch the whole collection
//! with one `SMEMBERS` and one `MGET` instead of scanning the keyspace.

use async_trait::async_trait;
use fred::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use statefacts_types::{FactDocument, StateCode};

use crate::error::DbError;
use crate::store::FactStore;

/// Set of state codes that have a stored fact document.
const FACTS_INDEX_KEY: &str = "states:with_facts";

/// Key holding the fact document for `code`.
fn facts_key(code: &StateCode) -> String {
    format!("state:{code}:facts")
}

/// Connection handle to a `Dragonfly` (Redis-compatible) instance.
///
/// Wraps a [`fred::prelude::Client`] and implements [`FactStore`] over the
/// key patterns listed in the module docs.
#[derive(Clone)]
pub struct DragonflyPool {
    client: Client,
}

impl DragonflyPool {
    /// Connect to `Dragonfly` at the given URL.
    ///
    /// The URL should follow the Redis URL scheme:
    /// `redis://host:port` or `redis://host:port/db`
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Config`] if the URL cannot be parsed.
    /// Returns [`DbError::Dragonfly`] if the connection fails.
    pub async fn connect(url: &str) -> Result<Self, DbError> {
        let config = Config::from_url(url)
            .map_err(|e| DbError::Config(format!("Invalid Dragonfly URL: {e}")))?;

        let client = Builder::from_config(config).build()?;
        client.init().await?;

        tracing::info!("Connected to Dragonfly");
        Ok(Self { client })
    }

    // =========================================================================
    // Generic JSON get/set
    // =========================================================================

    /// Serialize `value` as JSON and store it at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Serialization`] if serialization fails.
    /// Returns [`DbError::Dragonfly`] if the write fails.
    pub async fn set_json<T: Serialize + Sync>(&self, key: &str, value: &T) -> Result<(), DbError> {
        let json = serde_json::to_string(value)?;
        let _: () = self.client.set(key, json.as_str(), None, None, false).await?;
        Ok(())
    }

    /// Read the value at `key` and deserialize from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Serialization`] if deserialization fails.
    /// Returns [`DbError::Dragonfly`] if the read fails.
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, DbError> {
        let value: Option<String> = self.client.get(key).await?;
        value
            .map(|s| serde_json::from_str(&s))
            .transpose()
            .map_err(DbError::from)
    }

    /// Flush all keys from the `Dragonfly` instance.
    ///
    /// **WARNING:** This deletes all data. Only use for testing.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Dragonfly`] if the flush fails.
    pub async fn flush_all(&self) -> Result<(), DbError> {
        let _: () = self.client.flushall(false).await?;
        Ok(())
    }
}

#[async_trait]
impl FactStore for DragonflyPool {
    async fn find_all(&self) -> Result<Vec<FactDocument>, DbError> {
        let codes: Vec<String> = self.client.smembers(FACTS_INDEX_KEY).await?;
        if codes.is_empty() {
            return Ok(Vec::new());
        }

        let keys: Vec<String> = codes
            .iter()
            .map(|code| facts_key(&StateCode::normalize(code)))
            .collect();
        let values: Vec<Option<String>> = self.client.mget(keys).await?;

        let mut docs = Vec::with_capacity(values.len());
        for raw in values.iter().flatten() {
            docs.push(serde_json::from_str(raw)?);
        }
        Ok(docs)
    }

    async fn find_one(&self, code: &StateCode) -> Result<Option<FactDocument>, DbError> {
        self.get_json(&facts_key(code)).await
    }

    async fn save(&self, doc: &FactDocument) -> Result<(), DbError> {
        self.set_json(&facts_key(&doc.state_code), doc).await?;
        let _: u32 = self
            .client
            .sadd(FACTS_INDEX_KEY, doc.state_code.as_str())
            .await?;
        tracing::debug!(
            state_code = %doc.state_code,
            funfacts = doc.funfacts.len(),
            "Fact document saved"
        );
        Ok(())
    }
}
