//! Output formatting for subnet facts.
//!
//! This module handles formatting and outputting the results table:
//! - [`format`] - Binary mask and host address rendering
//! - [`rows`] - The property/value rows
//! - [`terminal`] - Aligned table with colors
//! - [`csv`] - CSV output formatting
//! - [`json`] - JSON output

mod csv;
mod format;
mod json;
mod rows;
mod terminal;

use crate::models::SubnetFacts;
use std::error::Error;

pub use csv::render_csv;
pub use format::{format_binary, format_host};
pub use json::render_json;
pub use rows::PropertyRow;
pub use terminal::{format_field, render_table};

/// How the facts are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned property/value table
    Table,
    /// `"property","value"` lines
    Csv,
    /// Full facts record as JSON
    Json,
}

/// Render the facts in the requested format.
pub fn render(facts: &SubnetFacts, format: OutputFormat) -> Result<String, Box<dyn Error>> {
    let text = match format {
        OutputFormat::Table => render_table(facts),
        OutputFormat::Csv => render_csv(facts),
        OutputFormat::Json => render_json(facts)?,
    };
    Ok(text)
}

/// Print the facts to stdout.
pub fn print_facts(facts: &SubnetFacts, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    log::debug!("print_facts({}, {format:?})", facts.cidr);
    println!("{}", render(facts, format)?);
    Ok(())
}
