//! The immutable reference dataset.
//!
//! Loaded once at startup from a JSON array of [`StateRecord`] and shared
//! read-only for the life of the process. There is deliberately no API to
//! add, remove, or edit records after construction.
//!
//! Record order is the order of the source file and is preserved by every
//! listing operation.

use std::collections::HashMap;
use std::path::Path;

use statefacts_types::{ContigFilter, StateCode, StateRecord};

/// Errors that can occur when loading the reference dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Failed to read the dataset file from disk.
    #[error("failed to read dataset file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// The dataset is not a valid JSON array of state records.
    #[error("failed to parse dataset JSON: {source}")]
    Json {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },

    /// The dataset contains no records.
    #[error("dataset contains no state records")]
    Empty,

    /// A record has a code that is not two uppercase ASCII letters.
    #[error("malformed state code {code:?} for {name}")]
    MalformedCode {
        /// The offending code as written in the file.
        code: String,
        /// Name of the record carrying it.
        name: String,
    },

    /// Two records share a code.
    #[error("duplicate state code {0}")]
    DuplicateCode(String),
}

/// Ordered, read-only table of state records keyed by code.
#[derive(Debug, Clone)]
pub struct ReferenceDataset {
    records: Vec<StateRecord>,
    by_code: HashMap<StateCode, usize>,
}

impl ReferenceDataset {
    /// Build the dataset from already-parsed records.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Empty`], [`DatasetError::MalformedCode`] or
    /// [`DatasetError::DuplicateCode`] when the records violate the table's
    /// invariants.
    pub fn from_records(records: Vec<StateRecord>) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut by_code = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if !record.code.is_well_formed() {
                return Err(DatasetError::MalformedCode {
                    code: record.code.to_string(),
                    name: record.name.clone(),
                });
            }
            if by_code.insert(record.code.clone(), position).is_some() {
                return Err(DatasetError::DuplicateCode(record.code.to_string()));
            }
        }

        Ok(Self { records, by_code })
    }

    /// Parse the dataset from a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Json`] if the content is not a JSON array of
    /// records, or any invariant error from [`Self::from_records`].
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let records: Vec<StateRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Load the dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Io`] if the file cannot be read, or any
    /// error from [`Self::from_json`].
    pub fn from_file(path: &Path) -> Result<Self, DatasetError> {
        let contents = std::fs::read_to_string(path)?;
        let dataset = Self::from_json(&contents)?;
        tracing::info!(
            path = %path.display(),
            records = dataset.len(),
            "Reference dataset loaded"
        );
        Ok(dataset)
    }

    /// Exact lookup by an already-normalized code.
    pub fn get(&self, code: &StateCode) -> Option<&StateRecord> {
        self.by_code
            .get(code)
            .and_then(|&position| self.records.get(position))
    }

    /// Uppercase caller input and look it up.
    pub fn resolve(&self, raw: &str) -> Option<&StateRecord> {
        self.get(&StateCode::normalize(raw))
    }

    /// Records passing `filter`, in dataset order.
    pub fn filter(&self, filter: ContigFilter) -> impl Iterator<Item = &StateRecord> {
        self.records
            .iter()
            .filter(move |record| filter.admits(record.code.as_str()))
    }

    /// All records in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &StateRecord> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records. Always false once constructed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundled() -> ReferenceDataset {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("data")
            .join("states.json");
        match ReferenceDataset::from_file(&path) {
            Ok(dataset) => dataset,
            Err(e) => panic!("bundled dataset failed to load: {e}"),
        }
    }

    #[test]
    fn bundled_dataset_has_fifty_states() {
        assert_eq!(bundled().len(), 50);
    }

    #[test]
    fn resolve_is_case_insensitive() {
        let dataset = bundled();
        let record = dataset.resolve("ks").map(|r| r.name.as_str());
        assert_eq!(record, Some("Kansas"));
        assert!(dataset.resolve("Ks").is_some());
        assert!(dataset.resolve("KS").is_some());
    }

    #[test]
    fn resolve_rejects_unknown_codes() {
        let dataset = bundled();
        assert!(dataset.resolve("XX").is_none());
        assert!(dataset.resolve("DC").is_none());
        assert!(dataset.resolve("").is_none());
        assert!(dataset.resolve("Kansas").is_none());
    }

    #[test]
    fn contiguous_filter_counts() {
        let dataset = bundled();
        assert_eq!(dataset.filter(ContigFilter::All).count(), 50);
        assert_eq!(dataset.filter(ContigFilter::Contiguous).count(), 48);

        let outliers: Vec<&str> = dataset
            .filter(ContigFilter::NonContiguous)
            .map(|r| r.code.as_str())
            .collect();
        assert_eq!(outliers, vec!["AK", "HI"]);
    }

    #[test]
    fn filter_preserves_file_order() {
        let dataset = bundled();
        let all: Vec<&str> = dataset.iter().map(|r| r.code.as_str()).collect();
        let filtered: Vec<&str> = dataset
            .filter(ContigFilter::All)
            .map(|r| r.code.as_str())
            .collect();
        assert_eq!(all, filtered);
        assert_eq!(all.first(), Some(&"AL"));
    }

    #[test]
    fn rejects_empty_array() {
        assert!(matches!(
            ReferenceDataset::from_json("[]"),
            Err(DatasetError::Empty)
        ));
    }

    #[test]
    fn rejects_duplicate_codes() {
        let json = r#"[
            {"state":"Kansas","code":"KS","nickname":"n","capital_city":"Topeka","population":1,"admission_date":"1861-01-29"},
            {"state":"Kansas Again","code":"KS","nickname":"n","capital_city":"Topeka","population":1,"admission_date":"1861-01-29"}
        ]"#;
        assert!(matches!(
            ReferenceDataset::from_json(json),
            Err(DatasetError::DuplicateCode(code)) if code == "KS"
        ));
    }

    #[test]
    fn rejects_malformed_codes() {
        let json = r#"[
            {"state":"Kansas","code":"Kan","nickname":"n","capital_city":"Topeka","population":1,"admission_date":"1861-01-29"}
        ]"#;
        assert!(matches!(
            ReferenceDataset::from_json(json),
            Err(DatasetError::MalformedCode { .. })
        ));
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(
            ReferenceDataset::from_json("{not json"),
            Err(DatasetError::Json { .. })
        ));
    }
}
