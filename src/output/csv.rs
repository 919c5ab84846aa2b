//! CSV output formatting for subnet calculations.

use super::terminal::format_field;
use crate::error::InvalidInputError;
use crate::models::SubnetFacts;
use itertools::Itertools;

/// CSV header matching [`csv_row`].
pub const CSV_HEADER: &str = r#""cnt","input","network","broadcast","first_host","last_host","host_count","subnet_mask","error""#;

/// Render one calculation (or its failure) as a CSV row.
pub fn csv_row(index: usize, spec: &str, result: &Result<SubnetFacts, InvalidInputError>) -> String {
    let mut fields = vec![format_field(index, 5), format_field(escape_csv_field(spec), 20)];
    match result {
        Ok(f) => {
            fields.extend([
                format_field(f.network, 17),
                format_field(f.broadcast, 17),
                format_field(f.first_host, 17),
                format_field(f.last_host, 17),
                format_field(f.host_count, 12),
                format_field(f.subnet_mask, 17),
                format_field("", 2),
            ]);
        }
        Err(e) => {
            fields.extend(std::iter::repeat(format_field("", 2)).take(6));
            fields.push(format_field(escape_csv_field(&e.to_string()), 2));
        }
    }
    fields.iter().join(",")
}

/// Print a CSV table of calculations to stdout.
pub fn print_csv(rows: &[(String, Result<SubnetFacts, InvalidInputError>)]) {
    log::info!("#Start print_csv() rows={}", rows.len());
    println!("{CSV_HEADER}");
    for (i, (spec, result)) in rows.iter().enumerate() {
        println!("{}", csv_row(i + 1, spec, result));
    }
}

// fields are quoted by format_field, so only embedded quotes need doubling
fn escape_csv_field(input: &str) -> String {
    input.replace('"', "\"\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::{calculate, PrefixInput};

    #[test]
    fn test_csv_row_ok() {
        let result = calculate("192.168.1.10", Some(PrefixInput::Bits(24)));
        let row = csv_row(1, "192.168.1.10/24", &result);
        let cells: Vec<&str> = row.split(',').map(str::trim).collect();
        assert_eq!(
            cells,
            vec![
                "\"1\"",
                "\"192.168.1.10/24\"",
                "\"192.168.1.0\"",
                "\"192.168.1.255\"",
                "\"192.168.1.1\"",
                "\"192.168.1.254\"",
                "\"254\"",
                "\"255.255.255.0\"",
                "\"\""
            ]
        );
    }

    #[test]
    fn test_csv_row_error() {
        let result = calculate("999.1.1.1/24", None);
        let row = csv_row(2, "999.1.1.1/24", &result);
        let cells: Vec<&str> = row.split(',').map(str::trim).collect();
        assert_eq!(cells.len(), 9);
        assert_eq!(cells[8], "\"invalid IP address: 999.1.1.1\"");
    }

    #[test]
    fn test_escape_csv_field() {
        assert_eq!(escape_csv_field(r#"a"b"#), r#"a""b"#);
    }
}
