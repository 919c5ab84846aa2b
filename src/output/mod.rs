//! Output formatting for calculation results.
//!
//! This module handles formatting and outputting subnet facts:
//! - [`csv`] - CSV output formatting
//! - [`terminal`] - Terminal output with colors

mod csv;
mod terminal;

pub use csv::{csv_row, print_csv, CSV_HEADER};
pub use terminal::{facts_lines, format_field, print_error, print_facts};
