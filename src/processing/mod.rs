//! Subnet calculation logic.
//!
//! This module turns the two input strings into [`crate::models::SubnetFacts`]:
//! - [`parser`] - Address and prefix parsing with validation
//! - [`calculator`] - Mask, network, broadcast, host range and class derivation

mod calculator;
mod parser;

// Re-export public functions
pub use calculator::{calculate, compute_subnet};
pub use parser::{parse_address, parse_prefix};
