//! # Numeric Kind Promotion
//!
//! The result kind of combining two numeric outputs.

use crate::{WordvecError, errors::WVResult};

/// The numeric kind of a vectorizer's output.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum NumericKind {
    /// Non-negative integer counts.
    Count,

    /// Floating point weights.
    Weight,
}

/// The kind produced by combining `left` and `right`.
///
/// ## Returns
/// The result kind, or [`WordvecError::UnsupportedCombination`]
/// when no mapping is defined for the pair.
pub fn result_kind(
    left: NumericKind,
    right: NumericKind,
) -> WVResult<NumericKind> {
    use NumericKind::*;
    match (left, right) {
        (Count, Count) => Ok(Count),
        (Weight, Weight) => Ok(Weight),
        (left, right) => Err(WordvecError::UnsupportedCombination {
            left: left.to_string(),
            right: right.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_result_kind() {
        for kind in NumericKind::iter() {
            assert_eq!(result_kind(kind, kind).unwrap(), kind);
        }

        let err = result_kind(NumericKind::Count, NumericKind::Weight).unwrap_err();
        assert_eq!(err.to_string(), "unsupported combination: count and weight");
        assert!(result_kind(NumericKind::Weight, NumericKind::Count).is_err());
    }
}
