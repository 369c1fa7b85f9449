//! Handler for pricing a parlay from the command line.

use tracing::debug;

use crate::cli::Cli;
use crate::domain::ParlayQuote;
use crate::error::Result;

/// Price the parlay described by the CLI arguments and print the result.
pub fn execute(cli: &Cli) -> Result<()> {
    debug!(
        legs = cli.leg_odds.len(),
        offered_total = cli.total_odds,
        take = cli.take,
        "pricing parlay"
    );

    let quote = ParlayQuote::try_new(&cli.leg_odds, cli.total_odds, cli.take)?;

    println!("{} total odds", quote.total.round());
    println!("{} fair odds", quote.fair.round());

    Ok(())
}
