//! Command-line interface definitions.

pub mod run;

use clap::Parser;

/// Vigorish - parlay fair-line and American odds calculator.
#[derive(Parser, Debug)]
#[command(name = "vigorish")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// American odds for each leg of the parlay
    #[arg(
        required = true,
        value_name = "LEG_ODDS",
        allow_negative_numbers = true
    )]
    pub leg_odds: Vec<f64>,

    /// American odds the book offers for the whole parlay
    #[arg(long, allow_negative_numbers = true)]
    pub total_odds: Option<f64>,

    /// Casino take as a fraction of winnings
    #[arg(long, default_value_t = 0.1, allow_negative_numbers = true)]
    pub take: f64,
}
