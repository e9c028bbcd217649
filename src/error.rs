//! Error types for subnet calculation.
//!
//! Only malformed input is an error. A degenerate host range (/31, /32) still
//! produces facts and is reported through [`crate::models::DegenerateRange`].

/// Input rejected before any subnet facts are computed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubnetError {
    /// The address text is not a dotted-decimal IPv4 address.
    #[error("Malformed address '{input}': {reason}")]
    MalformedAddress { input: String, reason: AddressFault },
    /// The prefix text is not `/N` or `N` with N in 0..=32.
    #[error("Malformed prefix '{input}': {reason}")]
    MalformedPrefix { input: String, reason: PrefixFault },
}

/// Why an address was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressFault {
    #[error("expected 4 dot-separated octets, found {0}")]
    SegmentCount(usize),
    #[error("octet '{0}' is not a decimal number")]
    NotNumeric(String),
    #[error("octet {0} is outside 0..=255")]
    OutOfRange(String),
}

/// Why a prefix was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrefixFault {
    #[error("expected /N or N with N a decimal number")]
    NotNumeric,
    #[error("prefix length {0} is outside 0..=32")]
    OutOfRange(String),
}

impl SubnetError {
    pub(crate) fn address(input: &str, reason: AddressFault) -> Self {
        SubnetError::MalformedAddress {
            input: input.to_string(),
            reason,
        }
    }

    pub(crate) fn prefix(input: &str, reason: PrefixFault) -> Self {
        SubnetError::MalformedPrefix {
            input: input.to_string(),
            reason,
        }
    }
}
