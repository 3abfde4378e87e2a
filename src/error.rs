use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Error type for the radix sort and its partition step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// Extrema were requested for a slice without elements.
    EmptyInput,

    /// A partition key fell outside of the requested closed range.
    KeyOutOfRange {
        /// The offending key.
        key: i64,
        /// Lower bound of the range, inclusive.
        lo: i64,
        /// Upper bound of the range, inclusive.
        hi: i64,
    },

    /// The key range needs more buckets than a counting partition is willing to allocate.
    RangeTooWide {
        /// Lower bound of the range, inclusive.
        lo: i64,
        /// Upper bound of the range, inclusive.
        hi: i64,
    },
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Input slice is empty"),
            Self::KeyOutOfRange { key, lo, hi } => {
                write!(f, "Key out of range: {key} (must be in [{lo}, {hi}])")
            }
            Self::RangeTooWide { lo, hi } => {
                write!(f, "Key range too wide for counting: [{lo}, {hi}]")
            }
        }
    }
}

impl Error for SortError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(SortError::EmptyInput.to_string(), "Input slice is empty");
        assert_eq!(
            SortError::KeyOutOfRange {
                key: 12,
                lo: 0,
                hi: 9
            }
            .to_string(),
            "Key out of range: 12 (must be in [0, 9])"
        );
        assert_eq!(
            SortError::RangeTooWide {
                lo: i64::MIN,
                hi: 0
            }
            .to_string(),
            format!("Key range too wide for counting: [{}, 0]", i64::MIN)
        );
    }

    #[test]
    fn boxes_as_std_error() {
        let err: Box<dyn Error> = Box::new(SortError::EmptyInput);
        assert!(err.source().is_none());
    }
}
