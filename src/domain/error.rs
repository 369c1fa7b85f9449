//! Domain validation errors for odds math.
//!
//! These errors are returned by the conversion and pricing functions when an
//! input violates a domain invariant. Invalid-input failures (a line inside
//! the forbidden interval, a bad take) are distinct variants from
//! degenerate-math failures (a payout with no American encoding), so callers
//! can tell the two apart.

use thiserror::Error;

/// Errors that occur when odds-domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// American lines inside the open interval (-100, 100) encode nothing,
    /// and non-finite values are rejected rather than propagated.
    #[error("{odds} is not a valid American line (must be >= 100 or <= -100)")]
    InvalidOdds {
        /// The invalid line that was provided.
        odds: f64,
    },

    /// A payout ratio at or below 1 has no American line: it implies zero or
    /// negative winnings.
    #[error("payout ratio {payout} has no American line (winnings would not be positive)")]
    DegeneratePayout {
        /// The payout ratio that could not be converted.
        payout: f64,
    },

    /// Parlays must have at least one leg.
    #[error("legs cannot be empty")]
    EmptyLegs,

    /// The house take must be a fraction of winnings in [0, 1).
    #[error("take must be a fraction in [0, 1), got {take}")]
    InvalidTake {
        /// The invalid take that was provided.
        take: f64,
    },
}
