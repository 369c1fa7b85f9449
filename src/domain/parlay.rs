//! Parlay pricing: combined lines and take-adjusted fair lines.
//!
//! A parlay pays the product of its legs' payout ratios. A book that prices
//! each leg with a proportional take on winnings, then multiplies the
//! discounted legs together, compounds that take across the parlay. The fair
//! line computed here is the one that applies the same per-leg take exactly
//! once to the whole bet.

use tracing::debug;

use super::error::DomainError;
use super::odds::{
    american_from_payout, payout_from_american, winnings_from_american, AmericanOdds, Payout,
    Probability,
};

/// Fraction of winnings retained by the house, in [0, 1).
pub type Take = f64;

/// Combined American line implied by the legs of a parlay.
///
/// The combined payout is the product of each leg's payout ratio, so leg
/// order is irrelevant. Fails on an empty leg list or any invalid leg.
pub fn total_parlay_odds(leg_odds: &[AmericanOdds]) -> Result<AmericanOdds, DomainError> {
    if leg_odds.is_empty() {
        return Err(DomainError::EmptyLegs);
    }
    let mut combined: Payout = 1.0;
    for &odds in leg_odds {
        combined *= payout_from_american(odds)?;
    }
    american_from_payout(combined)
}

/// Combined line a book with the given per-leg take should offer.
///
/// Each leg's implied win probability is recomputed as if its winnings were
/// scaled by `gamma = 1 - take`, which inflates the probability to what the
/// book actually believes. The fair payout then pays `gamma` times the fair
/// winnings on the whole parlay, charging the take once instead of once per
/// leg. For a single leg the adjustment cancels and the fair line equals the
/// leg's own line.
pub fn fair_parlay_odds(leg_odds: &[AmericanOdds], take: Take) -> Result<AmericanOdds, DomainError> {
    if leg_odds.is_empty() {
        return Err(DomainError::EmptyLegs);
    }
    if !(0.0..1.0).contains(&take) {
        return Err(DomainError::InvalidTake { take });
    }

    let gamma = 1.0 - take;
    let mut implied: Probability = 1.0;
    for &odds in leg_odds {
        implied *= 1.0 / (1.0 + winnings_from_american(odds)? / gamma);
    }
    debug!(implied_probability = implied, take, "adjusted parlay probability");

    let fair_payout = 1.0 + gamma * (1.0 / implied - 1.0);
    american_from_payout(fair_payout)
}

/// A priced parlay: the combined line and the take-adjusted fair line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParlayQuote {
    /// Combined American line for the parlay: the book's offered line when
    /// one was given, otherwise the line implied by the legs.
    pub total: AmericanOdds,

    /// American line that charges the per-leg take once on the whole bet.
    pub fair: AmericanOdds,
}

impl ParlayQuote {
    /// Prices a parlay from its legs.
    ///
    /// `offered_total` substitutes the book's quoted combined line for the
    /// one implied by the legs; it is validated like any other line. `take`
    /// is the fraction of winnings the house keeps on each leg.
    pub fn try_new(
        leg_odds: &[AmericanOdds],
        offered_total: Option<AmericanOdds>,
        take: Take,
    ) -> Result<Self, DomainError> {
        let total = match offered_total {
            Some(odds) => {
                winnings_from_american(odds)?;
                odds
            }
            None => total_parlay_odds(leg_odds)?,
        };
        let fair = fair_parlay_odds(leg_odds, take)?;

        Ok(Self { total, fair })
    }
}
