//! Core record types.
//!
//! [`StateRecord`] is the immutable reference data loaded at startup.
//! [`FactDocument`] is the mutable per-state document held by the fact
//! store. [`MergedState`] is the response-only join of the two.

use serde::{Deserialize, Serialize};

use crate::code::StateCode;

/// Static reference facts about one US state.
///
/// Serialized with the dataset's historical field names (`state`,
/// `capital_city`, `admission_date`) so existing clients keep working.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateRecord {
    /// Full state name, e.g. `Kansas`.
    #[serde(rename = "state")]
    pub name: String,
    /// URL-friendly name, e.g. `new-mexico`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub slug: String,
    /// Two-letter uppercase code.
    pub code: StateCode,
    /// Popular nickname.
    pub nickname: String,
    /// Capital city.
    #[serde(rename = "capital_city")]
    pub capital: String,
    /// Resident population.
    pub population: u64,
    /// Date of admission to the Union (`YYYY-MM-DD`).
    pub admission_date: String,
    /// Order of admission (Delaware is 1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admission_number: Option<u32>,
}

/// Persisted fun facts for a single state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactDocument {
    /// The state this document belongs to.
    pub state_code: StateCode,
    /// Ordered fun facts. Callers address entries by 1-based position.
    #[serde(default)]
    pub funfacts: Vec<String>,
}

impl FactDocument {
    /// Create a document holding the given facts.
    pub const fn new(state_code: StateCode, funfacts: Vec<String>) -> Self {
        Self {
            state_code,
            funfacts,
        }
    }

    /// Whether the document holds no facts.
    pub fn is_empty(&self) -> bool {
        self.funfacts.is_empty()
    }
}

/// A [`StateRecord`] overlaid with its persisted fun facts.
///
/// `funfacts` is only present when the stored sequence is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergedState {
    /// The static record, flattened into the response object.
    #[serde(flatten)]
    pub record: StateRecord,
    /// Persisted fun facts, omitted when there are none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funfacts: Option<Vec<String>>,
}

impl MergedState {
    /// Join a record with an optional fact document.
    ///
    /// A missing document and an empty document both yield a bare record.
    pub fn merge(record: StateRecord, facts: Option<&FactDocument>) -> Self {
        let funfacts = facts
            .filter(|doc| !doc.is_empty())
            .map(|doc| doc.funfacts.clone());
        Self { record, funfacts }
    }
}
