//! Output formatting for subnet results and the troubleshooting guide.
//!
//! - [`csv`] - CSV output formatting
//! - [`terminal`] - Terminal output with colors
//! - [`to_json`] - pretty JSON of any serializable result

mod csv;
mod terminal;

use serde::Serialize;
use std::error::Error;

pub use csv::{csv_row, subnet_print, CSV_HEADER};
pub use terminal::{format_field, format_number, render_category, render_subnet_result};

/// Serialize a value as pretty JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, Box<dyn Error>> {
    serde_json::to_string_pretty(value).map_err(|e| format!("Error serializing JSON: {e}").into())
}
