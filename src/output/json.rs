//! JSON output of subnet facts.

use crate::models::SubnetFacts;

/// Pretty-printed JSON of the full facts record.
pub fn render_json(facts: &SubnetFacts) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(facts)
}
