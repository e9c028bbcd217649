//! Terminal output with colors.
//!
//! Renders the two-column property/value table.

use crate::models::SubnetFacts;
use colored::Colorize;

/// Format a value as a left-aligned field of at least `width` characters.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// The padded string, or the value unchanged if it is already wider
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    format!("{value_str:<width$}")
}

/// Render the facts as an aligned property/value table.
pub fn render_table(facts: &SubnetFacts) -> String {
    let rows = facts.rows();
    let width = rows
        .iter()
        .map(|row| row.property.len())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(rows.len() + 3);
    lines.push(format!("Subnet Calculator: {}", facts.cidr.to_string().bold()));
    lines.push(format!(
        "{} {}",
        format_field("Property", width).underline(),
        "Value".underline()
    ));
    for row in rows {
        lines.push(format!("{} {}", format_field(row.property, width), row.value));
    }
    if let Some(kind) = facts.degenerate {
        lines.push(format!("{} {kind}", "WARNING".on_red()));
    }

    lines.join("\n")
}
