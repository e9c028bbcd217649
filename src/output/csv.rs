//! CSV output formatting for subnet facts.

use crate::models::SubnetFacts;

/// Quote a CSV field, doubling any embedded double quotes.
///
/// Every field is quoted, excel then keeps values like `11111111.00000000` as text.
fn escape_csv_field(input: &str) -> String {
    let escaped = input.replace('"', "\"\"");
    format!("\"{escaped}\"")
}

/// Render the facts as `"property","value"` CSV lines with a header.
pub fn render_csv(facts: &SubnetFacts) -> String {
    let mut lines = vec![r#""property","value""#.to_string()];
    lines.extend(facts.rows().iter().map(|row| {
        format!(
            "{property},{value}",
            property = escape_csv_field(row.property),
            value = escape_csv_field(&row.value),
        )
    }));
    lines.join("\n")
}
