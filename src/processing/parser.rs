//! Input parsing for the address and prefix text fields.
//!
//! Both parsers trim surrounding whitespace and reject anything that is not
//! plain ASCII decimal.

use crate::error::{AddressFault, PrefixFault, SubnetError};
use crate::models::PrefixLength;
use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// Matches `24` or `/24`, capturing the digits.
static PREFIX_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_prefix_regex() -> &'static Regex {
    PREFIX_REGEX.get_or_init(|| Regex::new(r"^/?([0-9]+)$").expect("Invalid Regex"))
}

/// Parse a dotted-decimal IPv4 address such as `10.21.150.251`.
///
/// Leading zeros are read as decimal, so `010.0.0.1` is `10.0.0.1`.
///
/// # Errors
/// [`SubnetError::MalformedAddress`] if there are not exactly 4 segments, or a
/// segment is not a number, or a number is above 255.
pub fn parse_address(text: &str) -> Result<Ipv4Addr, SubnetError> {
    let segments: Vec<&str> = text.trim().split('.').collect();
    log::trace!("parse_address({text}) segments={segments:?}");

    if segments.len() != 4 {
        return Err(SubnetError::address(
            text,
            AddressFault::SegmentCount(segments.len()),
        ));
    }

    let mut octets = [0u8; 4];
    for (octet, segment) in octets.iter_mut().zip(&segments) {
        *octet = parse_octet(text, segment)?;
    }

    Ok(Ipv4Addr::from(octets))
}

fn parse_octet(text: &str, segment: &str) -> Result<u8, SubnetError> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SubnetError::address(
            text,
            AddressFault::NotNumeric(segment.to_string()),
        ));
    }
    // only digits remain, so the one failure left is overflow
    segment
        .parse::<u8>()
        .map_err(|_| SubnetError::address(text, AddressFault::OutOfRange(segment.to_string())))
}

/// Parse a prefix written as `/N` or `N`.
///
/// # Errors
/// [`SubnetError::MalformedPrefix`] if the text is not a number with an optional
/// leading `/`, or the number is above 32.
pub fn parse_prefix(text: &str) -> Result<PrefixLength, SubnetError> {
    let digits = get_prefix_regex()
        .captures(text.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| SubnetError::prefix(text, PrefixFault::NotNumeric))?;

    digits
        .parse::<u8>()
        .ok()
        .and_then(PrefixLength::new)
        .ok_or_else(|| SubnetError::prefix(text, PrefixFault::OutOfRange(digits.to_string())))
}
