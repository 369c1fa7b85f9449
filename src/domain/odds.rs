//! American line conversions.
//!
//! American (moneyline) odds encode a payout two ways: a positive line X is
//! the profit on a $100 stake, a negative line X is the stake required to
//! win $100. Values strictly between -100 and 100 encode nothing and are
//! rejected. All conversions here are pure and return [`DomainError`] on
//! invalid input instead of propagating NaN or infinity.

use super::error::DomainError;

/// American betting line. Valid values lie outside the open interval
/// (-100, 100).
pub type AmericanOdds = f64;

/// Total return per unit staked on a win, including the stake.
pub type Payout = f64;

/// Net profit per unit staked on a win, excluding the stake.
pub type Winnings = f64;

/// Win probability implied by a line, in (0, 1).
pub type Probability = f64;

/// Net winnings multiple for a winning bet at the given American line.
///
/// This is the reciprocal of the implied win probability when the book
/// charges no take.
pub fn winnings_from_american(odds: AmericanOdds) -> Result<Winnings, DomainError> {
    if !odds.is_finite() || odds.abs() < 100.0 {
        return Err(DomainError::InvalidOdds { odds });
    }
    if odds >= 100.0 {
        Ok(odds / 100.0)
    } else {
        Ok(-100.0 / odds)
    }
}

/// Decimal payout ratio for the given American line: stake plus winnings.
pub fn payout_from_american(odds: AmericanOdds) -> Result<Payout, DomainError> {
    Ok(1.0 + winnings_from_american(odds)?)
}

/// American line for the given decimal payout ratio.
///
/// Winnings of exactly 1 (an even line, payout 2.0) map to +100, so -100
/// round-trips to its equivalent +100 encoding. Payouts at or below 1 have
/// no American encoding and fail with [`DomainError::DegeneratePayout`].
pub fn american_from_payout(payout: Payout) -> Result<AmericanOdds, DomainError> {
    let winnings = payout - 1.0;
    if !winnings.is_finite() || winnings <= 0.0 {
        return Err(DomainError::DegeneratePayout { payout });
    }
    if winnings >= 1.0 {
        Ok(100.0 * winnings)
    } else {
        Ok(-100.0 / winnings)
    }
}

/// Win probability implied by a line, assuming no house take.
pub fn implied_probability(odds: AmericanOdds) -> Result<Probability, DomainError> {
    Ok(1.0 / payout_from_american(odds)?)
}
