// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned row storage aligned to a header.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::HashMap;
use tracing::trace;

use crate::Value;

/// An ordered sequence of rows sharing one header.
///
/// This is a deliberately small representation:
/// - a fixed list of column names (header order is preserved),
/// - row-major cells aligned to that header,
/// - no implicit reordering: rows only ever leave through [`Dataset::remove_row`].
///
/// Column typing is decided by the first row, matching how the upload widget decides which
/// columns are offered for stacking.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<Value>>,
}

impl Dataset {
    /// Creates an empty dataset with the given header.
    ///
    /// Duplicate header names resolve to their first occurrence.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let mut index = HashMap::with_capacity(columns.len());
        for (i, name) in columns.iter().enumerate() {
            index.entry(name.clone()).or_insert(i);
        }
        Self {
            columns,
            index,
            rows: Vec::new(),
        }
    }

    /// The dataset shown before any file has been loaded.
    pub fn sample() -> Self {
        let mut ds = Self::new(["name", "value"]);
        for (name, value) in [
            ("Category A", 400.0),
            ("Category B", 300.0),
            ("Category C", 200.0),
            ("Category D", 278.0),
            ("Category E", 189.0),
        ] {
            ds.push_row([Value::from(name), Value::Number(value)]);
        }
        ds
    }

    /// Appends a row.
    ///
    /// Short rows are padded with [`Value::Null`]; surplus cells are dropped.
    pub fn push_row(&mut self, cells: impl IntoIterator<Item = Value>) {
        let width = self.columns.len();
        let mut row: Vec<Value> = cells.into_iter().take(width).collect();
        row.resize(width, Value::Null);
        self.rows.push(row);
    }

    /// Returns the header, in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns all rows, each aligned to [`Dataset::columns`].
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Returns the position of `column` in the header.
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.index.get(column).copied()
    }

    /// Returns `true` if `column` is part of the header.
    pub fn has_column(&self, column: &str) -> bool {
        self.index.contains_key(column)
    }

    /// Gets a cell by row and column name.
    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        let ci = self.column_index(column)?;
        self.rows.get(row)?.get(ci)
    }

    /// Gets a numeric cell, if the cell exists and is a number.
    pub fn f64(&self, row: usize, column: &str) -> Option<f64> {
        self.value(row, column).and_then(Value::as_f64)
    }

    /// Gets a numeric cell, treating missing and non-numeric cells as `0`.
    pub fn f64_or_zero(&self, row: usize, column: &str) -> f64 {
        self.f64(row, column).unwrap_or(0.0)
    }

    /// Returns one column as display strings, one per row.
    ///
    /// Unknown columns yield empty labels so category axes keep one slot per row.
    pub fn labels(&self, column: &str) -> Vec<String> {
        (0..self.len())
            .map(|row| self.value(row, column).map(ToString::to_string).unwrap_or_default())
            .collect()
    }

    /// Returns one column as numbers, treating missing and non-numeric cells as `0`.
    pub fn values_or_zero(&self, column: &str) -> Vec<f64> {
        (0..self.len())
            .map(|row| self.f64_or_zero(row, column))
            .collect()
    }

    /// Returns `true` if `column` holds a number in the first row.
    pub fn is_numeric_column(&self, column: &str) -> bool {
        self.value(0, column).is_some_and(Value::is_number)
    }

    /// Returns the numeric columns, in header order.
    pub fn numeric_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(String::as_str)
            .filter(|c| self.is_numeric_column(c))
            .collect()
    }

    /// Removes the row at `index`, keeping the order of the remaining rows.
    ///
    /// Returns `None` if `index` is out of range.
    pub fn remove_row(&mut self, index: usize) -> Option<Vec<Value>> {
        if index >= self.rows.len() {
            return None;
        }
        let row = self.rows.remove(index);
        trace!(index, remaining = self.rows.len(), "removed row");
        Some(row)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    fn mixed() -> Dataset {
        let mut ds = Dataset::new(["name", "value", "note", "extra"]);
        ds.push_row([
            Value::from("A"),
            Value::Number(10.0),
            Value::from("x"),
            Value::Number(1.0),
        ]);
        ds.push_row([Value::from("B"), Value::from("n/a")]);
        ds
    }

    #[test]
    fn short_rows_are_padded_with_null() {
        let ds = mixed();
        assert_eq!(ds.rows()[1].len(), 4);
        assert_eq!(ds.value(1, "extra"), Some(&Value::Null));
        assert_eq!(ds.f64_or_zero(1, "value"), 0.0);
    }

    #[test]
    fn numeric_typing_comes_from_the_first_row() {
        let ds = mixed();
        assert!(ds.is_numeric_column("value"));
        assert!(!ds.is_numeric_column("note"));
        assert!(!ds.is_numeric_column("missing"));
        assert_eq!(ds.numeric_columns(), vec!["value", "extra"]);
    }

    #[test]
    fn remove_row_preserves_order() {
        let mut ds = Dataset::sample();
        let removed = ds.remove_row(1).expect("row 1 exists");
        assert_eq!(removed[0], Value::from("Category B"));
        assert_eq!(
            ds.labels("name"),
            vec!["Category A", "Category C", "Category D", "Category E"]
        );
        assert!(ds.remove_row(10).is_none());
    }

    #[test]
    fn duplicate_headers_resolve_to_first_column() {
        let mut ds = Dataset::new(["a", "a"]);
        ds.push_row([Value::Number(1.0), Value::Number(2.0)]);
        assert_eq!(ds.f64(0, "a"), Some(1.0));
    }

    #[test]
    fn empty_dataset_has_no_numeric_columns() {
        let ds = Dataset::new(["name", "value"]);
        assert!(ds.is_empty());
        assert!(ds.numeric_columns().is_empty());
    }
}
