//! Computed subnet facts.

use super::{AddressClass, Ipv4, PrefixLength};
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// A prefix too long to leave room for usable hosts.
///
/// Reported alongside the facts, never as an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateRange {
    /// `/31`: two addresses, zero usable hosts.
    PointToPoint,
    /// `/32`: one address, host count -1.
    SingleHost,
}

impl DegenerateRange {
    pub const fn for_prefix(prefix: PrefixLength) -> Option<DegenerateRange> {
        match prefix.get() {
            31 => Some(DegenerateRange::PointToPoint),
            32 => Some(DegenerateRange::SingleHost),
            _ => None,
        }
    }
}

impl fmt::Display for DegenerateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegenerateRange::PointToPoint => {
                f.write_str("/31 has no usable host range (point-to-point link)")
            }
            DegenerateRange::SingleHost => {
                f.write_str("/32 has no usable host range (single host route)")
            }
        }
    }
}

/// Everything computed for one address and prefix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubnetFacts {
    /// The input address with its prefix, e.g. `10.21.150.251/24`.
    pub cidr: Ipv4,
    pub network: Ipv4Addr,
    pub mask: Ipv4Addr,
    /// Mask as 8-bit binary groups, e.g. `11111111.11111111.11111111.00000000`.
    pub binary_mask: String,
    pub broadcast: Ipv4Addr,
    /// `None` when the prefix leaves no usable host range.
    pub first_host: Option<Ipv4Addr>,
    pub last_host: Option<Ipv4Addr>,
    /// `2^(32-p) - 2`, negative for `/32`.
    pub usable_hosts: i64,
    pub class: AddressClass,
    pub degenerate: Option<DegenerateRange>,
}
