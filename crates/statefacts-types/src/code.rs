//! Normalized state code wrapper.
//!
//! A [`StateCode`] is always uppercase. It does not by itself prove the
//! code exists in the reference dataset; that check belongs to the request
//! validator, which only hands out codes it has resolved.

use serde::{Deserialize, Serialize};

/// Two-letter uppercase abbreviation identifying a US state.
///
/// This is the primary key for both the static dataset and the fact store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateCode(String);

impl StateCode {
    /// Build a code from caller input, uppercasing it.
    ///
    /// Surrounding whitespace is not trimmed: `" ks"` stays invalid.
    pub fn normalize(raw: &str) -> Self {
        Self(raw.to_ascii_uppercase())
    }

    /// Whether the code has the `XX` shape (two ASCII uppercase letters).
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == 2 && self.0.bytes().all(|b| b.is_ascii_uppercase())
    }

    /// Borrow the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for StateCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StateCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_uppercases() {
        assert_eq!(StateCode::normalize("ks").as_str(), "KS");
        assert_eq!(StateCode::normalize("Ok").as_str(), "OK");
    }

    #[test]
    fn well_formed_requires_two_letters() {
        assert!(StateCode::normalize("tx").is_well_formed());
        assert!(!StateCode::normalize("t").is_well_formed());
        assert!(!StateCode::normalize("txx").is_well_formed());
        assert!(!StateCode::normalize("t1").is_well_formed());
        assert!(!StateCode::normalize(" t").is_well_formed());
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&StateCode::normalize("nm")).unwrap_or_default();
        assert_eq!(json, "\"NM\"");
    }
}
