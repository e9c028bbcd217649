//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] struct for an address paired with its prefix length,
//! along with the mask arithmetic used by the calculator.

use super::PrefixLength;
use serde::{Serialize, Serializer};
use std::fmt;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_calc::models::{get_cidr_mask, PrefixLength};
/// assert_eq!(get_cidr_mask(PrefixLength::new(24).unwrap()), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(PrefixLength::MIN), 0);
/// ```
pub fn get_cidr_mask(len: PrefixLength) -> u32 {
    // shift in u64 so /0 does not shift a u32 by 32
    let right_len = len.host_bits();
    let all_bits = u32::MAX as u64;

    let mask = (all_bits >> right_len) << right_len;

    mask as u32
}

/// Subnet mask for `len` as an address, e.g. `/24` -> `255.255.255.0`.
pub fn mask_addr(len: PrefixLength) -> Ipv4Addr {
    Ipv4Addr::from(get_cidr_mask(len))
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: PrefixLength) -> Ipv4Addr {
    let bits = u32::from(addr);
    Ipv4Addr::from(bits & get_cidr_mask(len))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: PrefixLength) -> Ipv4Addr {
    let mask = get_cidr_mask(len);
    let network_bits = u32::from(addr) & mask;
    Ipv4Addr::from(network_bits | !mask)
}

/// Number of usable host addresses, network and broadcast excluded.
///
/// Not clamped: `/31` gives 0 and `/32` gives -1.
pub fn usable_hosts(len: PrefixLength) -> i64 {
    (1i64 << len.host_bits()) - 2
}

/// Address directly after `addr`, carrying across octets.
///
/// `None` past `255.255.255.255`.
pub fn addr_after(addr: Ipv4Addr) -> Option<Ipv4Addr> {
    u32::from(addr).checked_add(1).map(Ipv4Addr::from)
}

/// Address directly before `addr`, borrowing across octets.
///
/// `None` below `0.0.0.0`.
pub fn addr_before(addr: Ipv4Addr) -> Option<Ipv4Addr> {
    u32::from(addr).checked_sub(1).map(Ipv4Addr::from)
}

/// IPv4 address with CIDR notation support.
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address as given, host bits included.
    pub addr: Ipv4Addr,
    /// The subnet prefix length.
    pub prefix: PrefixLength,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl Ipv4 {
    pub fn new(addr: Ipv4Addr, prefix: PrefixLength) -> Ipv4 {
        Ipv4 { addr, prefix }
    }

    /// Get the subnet mask of this subnet.
    pub fn mask(&self) -> Ipv4Addr {
        mask_addr(self.prefix)
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        cut_addr(self.addr, self.prefix)
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.prefix)
    }
}

impl fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}
