//! CIDR prefix length.

use super::ipv4::MAX_LENGTH;
use serde::Serialize;
use std::fmt;

/// Number of leading one-bits in a subnet mask, always in 0..=32.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PrefixLength(u8);

impl PrefixLength {
    /// `/0`, the whole address space.
    pub const MIN: PrefixLength = PrefixLength(0);
    /// `/32`, a single address.
    pub const MAX: PrefixLength = PrefixLength(MAX_LENGTH);

    /// Returns `None` if `len` is greater than 32.
    pub const fn new(len: u8) -> Option<PrefixLength> {
        if len > MAX_LENGTH {
            None
        } else {
            Some(PrefixLength(len))
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Bits left for the host part.
    pub const fn host_bits(self) -> u8 {
        MAX_LENGTH - self.0
    }
}

impl fmt::Display for PrefixLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
