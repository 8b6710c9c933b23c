//! Contiguous-states listing filter.

/// Codes of the two states that are not part of the contiguous 48.
pub const NON_CONTIGUOUS_CODES: [&str; 2] = ["AK", "HI"];

/// Restriction applied to the state listing.
///
/// Parsed from the `contig` query parameter. Anything other than the
/// exact strings `true` and `false` means no filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContigFilter {
    /// Every state in the dataset.
    #[default]
    All,
    /// The 48 contiguous states (everything except Alaska and Hawaii).
    Contiguous,
    /// Only Alaska and Hawaii.
    NonContiguous,
}

impl ContigFilter {
    /// Interpret the raw `contig` query value.
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw {
            Some("true") => Self::Contiguous,
            Some("false") => Self::NonContiguous,
            _ => Self::All,
        }
    }

    /// Whether a record with the given code passes this filter.
    pub fn admits(self, code: &str) -> bool {
        let non_contiguous = NON_CONTIGUOUS_CODES.contains(&code);
        match self {
            Self::All => true,
            Self::Contiguous => !non_contiguous,
            Self::NonContiguous => non_contiguous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_values_disable_filtering() {
        assert_eq!(ContigFilter::from_query(None), ContigFilter::All);
        assert_eq!(ContigFilter::from_query(Some("TRUE")), ContigFilter::All);
        assert_eq!(ContigFilter::from_query(Some("yes")), ContigFilter::All);
        assert_eq!(ContigFilter::from_query(Some("")), ContigFilter::All);
    }

    #[test]
    fn contiguous_excludes_alaska_and_hawaii() {
        let filter = ContigFilter::from_query(Some("true"));
        assert!(!filter.admits("AK"));
        assert!(!filter.admits("HI"));
        assert!(filter.admits("KS"));
    }

    #[test]
    fn non_contiguous_keeps_only_alaska_and_hawaii() {
        let filter = ContigFilter::from_query(Some("false"));
        assert!(filter.admits("AK"));
        assert!(filter.admits("HI"));
        assert!(!filter.admits("CA"));
    }
}
