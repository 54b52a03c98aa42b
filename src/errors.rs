//! Error type for the utility APIs.
//!
//! A small `thiserror` + `miette` diagnostic enum: every fallible operation
//! in this crate returns [`UtilResult`] and callers propagate with `?`. The
//! utilities here have no parsed source to point at, so these diagnostics
//! carry codes and help text but no source spans.

use miette::Diagnostic;
use thiserror::Error;

pub type UtilResult<T> = Result<T, UtilError>;

#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum UtilError {
    /// An element handed to `to_map` was not a usable key/value pair.
    #[error("malformed key/value pair at index {index}: expected a two-element list with a string or symbol key, found {found}")]
    #[diagnostic(
        code(weft_util::mapping::malformed_pair),
        help("every element must be a list of exactly two items whose first item names the key")
    )]
    MalformedPair { index: usize, found: String },

    /// `substitute` was called with an empty pattern.
    #[error("substitution pattern is empty")]
    #[diagnostic(
        code(weft_util::sequence::empty_pattern),
        help("matching an empty pattern has no defined semantics; pass at least one element")
    )]
    EmptyPattern,

    /// `restrict` was called with an inverted range.
    #[error("invalid range: lower bound {low} exceeds upper bound {high}")]
    #[diagnostic(code(weft_util::numeric::invalid_range))]
    InvalidRange { low: String, high: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offending_input() {
        let err = UtilError::MalformedPair {
            index: 2,
            found: "Number `12`".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("index 2"));
        assert!(msg.contains("Number `12`"));

        let err = UtilError::InvalidRange {
            low: "3".to_string(),
            high: "1".to_string(),
        };
        assert!(err.to_string().contains("lower bound 3 exceeds upper bound 1"));
    }
}
