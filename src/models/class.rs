//! Classful address categories.

use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// Historical address class, decided by the first octet only.
///
/// `0` and `127` (loopback) are left unclassified.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum AddressClass {
    A,
    B,
    C,
    D,
    E,
    Undefined,
}

impl AddressClass {
    pub const fn from_first_octet(octet: u8) -> AddressClass {
        match octet {
            1..=126 => AddressClass::A,
            128..=191 => AddressClass::B,
            192..=223 => AddressClass::C,
            224..=239 => AddressClass::D,
            240..=255 => AddressClass::E,
            0 | 127 => AddressClass::Undefined,
        }
    }

    /// Class of `addr`, taken from its first octet.
    pub const fn of(addr: Ipv4Addr) -> AddressClass {
        Self::from_first_octet(addr.octets()[0])
    }

    /// Text for the results table, empty when unclassified.
    pub const fn label(self) -> &'static str {
        match self {
            AddressClass::A => "Class A",
            AddressClass::B => "Class B",
            AddressClass::C => "Class C",
            AddressClass::D => "Class D",
            AddressClass::E => "Class E",
            AddressClass::Undefined => "",
        }
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
