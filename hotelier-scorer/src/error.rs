//! Error types raised while configuring matchers.
#![forbid(unsafe_code)]

use hotelier_core::HotelField;
use thiserror::Error;

/// Errors raised by [`WeightedFuzzyMatcher::new`](crate::WeightedFuzzyMatcher::new).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatcherConfigError {
    /// No fields were configured.
    #[error("a matcher needs at least one weighted field")]
    NoFields,
    /// A field weight was zero, negative or not finite.
    #[error("field {field:?} has invalid weight {weight}")]
    InvalidWeight {
        /// Field carrying the weight.
        field: HotelField,
        /// Offending weight.
        weight: f64,
    },
    /// The threshold was outside `0.0..1.0`.
    #[error("threshold {threshold} is outside 0.0..1.0")]
    InvalidThreshold {
        /// Offending threshold.
        threshold: f64,
    },
}
