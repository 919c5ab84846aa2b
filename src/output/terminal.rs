//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

use crate::models::SubnetFacts;
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Label/value lines describing one calculation, uncolored.
pub fn facts_lines(facts: &SubnetFacts) -> Vec<(&'static str, String)> {
    vec![
        ("Network", facts.network.to_string()),
        ("Broadcast", facts.broadcast.to_string()),
        ("First host", facts.first_host.to_string()),
        ("Last host", facts.last_host.to_string()),
        ("Hosts", facts.host_count.to_string()),
        ("Subnet mask", facts.subnet_mask.to_string()),
    ]
}

/// Print the facts of one network as an aligned, colored block.
pub fn print_facts(spec: &str, facts: &SubnetFacts) {
    println!("{}", spec.on_blue());
    for (label, value) in facts_lines(facts) {
        println!("  {:<12} {}", label.bold(), value);
    }
}

/// Print a rejected input.
pub fn print_error(spec: &str, error: &dyn std::fmt::Display) {
    println!("{} {} {}", spec.on_blue(), "failed".on_red(), error);
}
