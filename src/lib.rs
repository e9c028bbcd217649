//! IPv4 subnet calculator.
//!
//! [`compute_subnet`] takes an address and a prefix as plain text and returns the
//! network, mask, broadcast, host range, host count and address class.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use cli::Cli;
use config::Config;
use std::error::Error;

pub use error::{AddressFault, PrefixFault, SubnetError};
pub use models::{AddressClass, DegenerateRange, PrefixLength, SubnetFacts};
pub use processing::{calculate, compute_subnet};

/// Compute and print the facts for the command-line arguments.
///
/// `--format` wins over the configured format.
pub fn run(cli: &Cli, config: &Config) -> Result<SubnetFacts, Box<dyn Error>> {
    let facts = compute_subnet(&cli.ip_address, &cli.prefix)?;
    let format = cli.format.unwrap_or(config.format);
    output::print_facts(&facts, format)?;
    Ok(facts)
}
