//! Subnet calculation pipeline.
//!
//! parse -> mask -> network/broadcast -> host range/count -> class -> facts

use super::parser::{parse_address, parse_prefix};
use crate::error::SubnetError;
use crate::models::{
    addr_after, addr_before, usable_hosts, AddressClass, DegenerateRange, Ipv4, PrefixLength,
    SubnetFacts,
};
use crate::output::format_binary;
use std::net::Ipv4Addr;

/// Compute subnet facts from the raw address and prefix text.
///
/// # Arguments
/// * `ip_address_text` - Dotted-decimal address, e.g. `10.21.150.251`
/// * `prefix_text` - Prefix as `/N` or `N`
///
/// # Returns
/// * `Ok(SubnetFacts)` - The computed facts, degenerate ranges included
/// * `Err(SubnetError)` - If either input is malformed, nothing is computed
///
/// # Examples
/// ```
/// let facts = subnet_calc::compute_subnet("192.168.1.10", "/30").unwrap();
/// assert_eq!(facts.network.to_string(), "192.168.1.8");
/// assert_eq!(facts.usable_hosts, 2);
/// ```
pub fn compute_subnet(ip_address_text: &str, prefix_text: &str) -> Result<SubnetFacts, SubnetError> {
    log::debug!("compute_subnet({ip_address_text:?}, {prefix_text:?})");

    let addr = parse_address(ip_address_text).inspect_err(|e| log::debug!("{e}"))?;
    let prefix = parse_prefix(prefix_text).inspect_err(|e| log::debug!("{e}"))?;

    Ok(calculate(addr, prefix))
}

/// Compute subnet facts for an already validated address and prefix.
pub fn calculate(addr: Ipv4Addr, prefix: PrefixLength) -> SubnetFacts {
    let cidr = Ipv4::new(addr, prefix);
    let mask = cidr.mask();
    let network = cidr.lo();
    let broadcast = cidr.hi();
    log::debug!("{cidr}: mask={mask} network={network} broadcast={broadcast}");

    let degenerate = DegenerateRange::for_prefix(prefix);
    let (first_host, last_host) = match degenerate {
        Some(kind) => {
            log::warn!("{cidr}: {kind}");
            (None, None)
        }
        None => host_range(network, broadcast),
    };

    SubnetFacts {
        cidr,
        network,
        mask,
        binary_mask: format_binary(mask),
        broadcast,
        first_host,
        last_host,
        usable_hosts: usable_hosts(prefix),
        class: AddressClass::of(addr),
        degenerate,
    }
}

/// First and last usable host, one step inside network and broadcast.
fn host_range(network: Ipv4Addr, broadcast: Ipv4Addr) -> (Option<Ipv4Addr>, Option<Ipv4Addr>) {
    let first = addr_after(network);
    let last = addr_before(broadcast);
    if first.is_none() || last.is_none() {
        log::warn!("Host range of {network}..{broadcast} leaves the address space");
    }
    (first, last)
}
