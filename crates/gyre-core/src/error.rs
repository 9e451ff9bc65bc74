//! Error types for the Gyre mixing engine.
//!
//! Construction-time and query-time failures are reported before any
//! topology is touched, so a returned error never leaves a mixer
//! half-modified.

use std::error::Error;
use std::fmt;

/// Errors from mixer construction, configuration, and anchor queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MixError {
    /// The input sequence has no elements.
    EmptySequence,
    /// The input sequence has more elements than an `ElementId` can address.
    SequenceTooLong {
        /// Number of values supplied.
        len: usize,
        /// Largest supported length.
        max: usize,
    },
    /// Multiplying an input value by the scale overflowed `i64`.
    ScaleOverflow {
        /// Position of the offending value in the input.
        index: usize,
        /// The unscaled input value.
        value: i64,
        /// The configured scale.
        scale: i64,
    },
    /// No element carries the requested anchor value.
    AnchorNotFound {
        /// The value that was looked up.
        anchor: i64,
    },
    /// More than one element carries the requested anchor value.
    AmbiguousAnchor {
        /// The value that was looked up.
        anchor: i64,
        /// How many elements carry it.
        occurrences: usize,
    },
    /// A mix configuration failed validation.
    InvalidConfig {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for MixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySequence => write!(f, "sequence must have at least one element"),
            Self::SequenceTooLong { len, max } => {
                write!(f, "sequence too long: {len} elements, max {max}")
            }
            Self::ScaleOverflow {
                index,
                value,
                scale,
            } => {
                write!(
                    f,
                    "scaling value {value} at index {index} by {scale} overflows i64"
                )
            }
            Self::AnchorNotFound { anchor } => {
                write!(f, "no element has anchor value {anchor}")
            }
            Self::AmbiguousAnchor {
                anchor,
                occurrences,
            } => {
                write!(
                    f,
                    "anchor value {anchor} is ambiguous: {occurrences} elements carry it"
                )
            }
            Self::InvalidConfig { reason } => write!(f, "invalid mix config: {reason}"),
        }
    }
}

impl Error for MixError {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_sequence_message() {
        assert_eq!(
            MixError::EmptySequence.to_string(),
            "sequence must have at least one element"
        );
    }

    #[test]
    fn ambiguous_anchor_reports_occurrences() {
        let err = MixError::AmbiguousAnchor {
            anchor: 5,
            occurrences: 3,
        };
        assert_eq!(
            err.to_string(),
            "anchor value 5 is ambiguous: 3 elements carry it"
        );
    }

    #[test]
    fn errors_are_std_errors() {
        let err: Box<dyn Error> = Box::new(MixError::InvalidConfig {
            reason: "scale must be non-zero".into(),
        });
        assert!(err.to_string().contains("scale must be non-zero"));
        assert!(err.source().is_none());
    }

    proptest! {
        #[test]
        fn anchor_not_found_mentions_anchor(anchor in any::<i64>()) {
            let msg = MixError::AnchorNotFound { anchor }.to_string();
            prop_assert!(msg.ends_with(&anchor.to_string()));
        }
    }
}
