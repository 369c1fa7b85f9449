//! Bookmaker-agnostic odds math.

mod odds;
mod parlay;

pub mod error;

// Line conversions
pub use odds::{
    american_from_payout, implied_probability, payout_from_american, winnings_from_american,
    AmericanOdds, Payout, Probability, Winnings,
};

// Parlay pricing
pub use parlay::{fair_parlay_odds, total_parlay_odds, ParlayQuote, Take};
