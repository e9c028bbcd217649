//! Text rendering of addresses.

use crate::config::NOT_AVAILABLE;
use itertools::Itertools;
use std::net::Ipv4Addr;

/// Render each octet as 8 zero-padded binary digits, dot-joined.
///
/// # Examples
/// ```
/// use std::net::Ipv4Addr;
/// use subnet_calc::output::format_binary;
/// assert_eq!(
///     format_binary(Ipv4Addr::new(255, 255, 240, 0)),
///     "11111111.11111111.11110000.00000000"
/// );
/// ```
pub fn format_binary(addr: Ipv4Addr) -> String {
    addr.octets().iter().map(|octet| format!("{octet:08b}")).join(".")
}

/// Render a host address, or `n/a` when there is none.
pub fn format_host(host: Option<Ipv4Addr>) -> String {
    host.map(|addr| addr.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_binary() {
        assert_eq!(
            format_binary(Ipv4Addr::new(255, 255, 255, 0)),
            "11111111.11111111.11111111.00000000"
        );
        assert_eq!(
            format_binary(Ipv4Addr::new(255, 128, 0, 0)),
            "11111111.10000000.00000000.00000000"
        );
        assert_eq!(
            format_binary(Ipv4Addr::new(10, 1, 2, 3)),
            "00001010.00000001.00000010.00000011"
        );
    }

    #[test]
    fn test_format_host() {
        assert_eq!(format_host(Some(Ipv4Addr::new(10, 21, 150, 1))), "10.21.150.1");
        assert_eq!(format_host(None), "n/a");
    }
}
