//! Domain models for the subnet calculator.
//!
//! This module contains the core value types:
//! - [`Ipv4`] - IPv4 address with CIDR notation support, plus mask arithmetic
//! - [`PrefixLength`] - validated prefix length (0..=32)
//! - [`AddressClass`] - classful categorization
//! - [`SubnetFacts`] - the calculator's result

mod class;
mod facts;
mod ipv4;
mod prefix;

// Re-export public types
pub use class::AddressClass;
pub use facts::{DegenerateRange, SubnetFacts};
pub use ipv4::{
    addr_after, addr_before, broadcast_addr, cut_addr, get_cidr_mask, mask_addr, usable_hosts,
    Ipv4, MAX_LENGTH,
};
pub use prefix::PrefixLength;
