// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io;

use chartgarden_table::{Dataset, Value};
use csv::ReaderBuilder;
use tracing::debug;

use crate::ParseError;

/// Parses CSV text into a dataset.
pub fn parse_str(text: &str) -> Result<Dataset, ParseError> {
    parse_reader(text.as_bytes())
}

/// Parses CSV from any reader into a dataset.
///
/// Empty lines are skipped. Any other line is a row, so a line of bare separators (`,,`) or
/// a quoted empty field (`""`) loads as a row of nulls.
///
/// Returns [`ParseError::Empty`] when there is no header or no data line.
pub fn parse_reader<R: io::Read>(reader: R) -> Result<Dataset, ParseError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(ParseError::Empty);
    }

    let mut dataset = Dataset::new(headers.iter());
    for record in rdr.records() {
        let record = record?;
        dataset.push_row(record.iter().map(type_cell));
    }
    if dataset.is_empty() {
        return Err(ParseError::Empty);
    }

    debug!(
        columns = dataset.columns().len(),
        rows = dataset.len(),
        numeric = dataset.numeric_columns().len(),
        "parsed csv"
    );
    Ok(dataset)
}

/// Types a single cell.
///
/// - empty cells become [`Value::Null`],
/// - plain decimal numbers (optionally negative, with a fraction or exponent, surrounding
///   whitespace ignored) become [`Value::Number`],
/// - everything else, including whitespace-only cells, `true`/`false`, `inf` and `+1`,
///   stays [`Value::Text`] as written.
pub fn type_cell(cell: &str) -> Value {
    if cell.is_empty() {
        return Value::Null;
    }
    let trimmed = cell.trim();
    if looks_numeric(trimmed) {
        if let Ok(v) = trimmed.parse::<f64>() {
            if v.is_finite() {
                return Value::Number(v);
            }
        }
    }
    Value::Text(cell.to_owned())
}

fn looks_numeric(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    digits.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        && digits
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'-' | b'+'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_typed_individually() {
        assert_eq!(type_cell("42"), Value::Number(42.0));
        assert_eq!(type_cell(" -3.5 "), Value::Number(-3.5));
        assert_eq!(type_cell(".5"), Value::Number(0.5));
        assert_eq!(type_cell("1e3"), Value::Number(1000.0));
        assert_eq!(type_cell(""), Value::Null);
        assert_eq!(type_cell("   "), Value::from("   "));
        assert_eq!(type_cell("true"), Value::from("true"));
        assert_eq!(type_cell("inf"), Value::from("inf"));
        assert_eq!(type_cell("+1"), Value::from("+1"));
        assert_eq!(type_cell("1.2.3"), Value::from("1.2.3"));
        assert_eq!(type_cell("12 apples"), Value::from("12 apples"));
    }

    #[test]
    fn empty_lines_are_skipped_and_short_rows_padded() {
        let ds = parse_str("name,value,extra\nA,10,1\n\n,,\nB,20\n").expect("valid csv");
        assert_eq!(ds.len(), 3);
        assert!(ds.rows()[1].iter().all(Value::is_null));
        assert_eq!(ds.value(2, "name"), Some(&Value::from("B")));
        assert_eq!(ds.value(2, "extra"), Some(&Value::Null));
        assert_eq!(ds.numeric_columns(), ["value", "extra"]);
    }

    #[test]
    fn quoted_empty_field_is_a_null_row() {
        let ds = parse_str("name\nA\n\"\"\nB\n").expect("valid csv");
        assert_eq!(ds.len(), 3);
        assert!(ds.value(1, "name").is_some_and(Value::is_null));
    }

    #[test]
    fn header_only_input_is_empty() {
        assert!(matches!(parse_str("name,value\n"), Err(ParseError::Empty)));
        assert!(matches!(parse_str(""), Err(ParseError::Empty)));
    }

    #[test]
    fn quoted_fields_keep_separators() {
        let ds = parse_str("name,value\n\"Smith, J\",3\n").expect("valid csv");
        assert_eq!(ds.value(0, "name"), Some(&Value::from("Smith, J")));
        assert_eq!(ds.f64(0, "value"), Some(3.0));
    }
}
