//! Property/value rows of the results table.

use super::format::format_host;
use crate::models::SubnetFacts;

/// One line of the results table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRow {
    pub property: &'static str,
    pub value: String,
}

impl SubnetFacts {
    /// The results table rows, in display order.
    pub fn rows(&self) -> Vec<PropertyRow> {
        let values = [
            ("Network Address", self.network.to_string()),
            ("Subnet Mask", self.mask.to_string()),
            ("Binary Subnet Mask", self.binary_mask.clone()),
            ("Broadcast Address", self.broadcast.to_string()),
            ("First Host", format_host(self.first_host)),
            ("Last Host", format_host(self.last_host)),
            ("Number of Usable Hosts", self.usable_hosts.to_string()),
            ("Network Class", self.class.to_string()),
        ];

        values
            .into_iter()
            .map(|(property, value)| PropertyRow { property, value })
            .collect()
    }
}
