// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative chart configuration and its column-set invariants.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use chartgarden_table::Dataset;
use tracing::debug;

use crate::ChartKind;

/// What to draw: chart kind, key columns, stacking sets and display toggles.
///
/// The column sets are kept valid against the current dataset:
/// - `stack_columns` never contains the name or value key,
/// - `left_columns` and `right_columns` are disjoint and never contain the name key,
/// - every set member is numeric in the first row.
///
/// Every setter that can break these re-prunes; invalid selections are dropped silently.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    name_key: String,
    value_key: String,
    kind: ChartKind,
    stack_columns: Vec<String>,
    diverging: bool,
    left_columns: Vec<String>,
    right_columns: Vec<String>,
    show_data_values: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            name_key: String::from("name"),
            value_key: String::from("value"),
            kind: ChartKind::Bar,
            stack_columns: Vec::new(),
            diverging: false,
            left_columns: Vec::new(),
            right_columns: Vec::new(),
            show_data_values: false,
        }
    }
}

impl ChartConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the chart kind.
    pub fn with_kind(mut self, kind: ChartKind) -> Self {
        self.kind = kind;
        self
    }

    /// Enables or disables value labels.
    pub fn with_show_data_values(mut self, show: bool) -> Self {
        self.show_data_values = show;
        self
    }

    /// Enables or disables diverging stacks.
    pub fn with_diverging(mut self, diverging: bool) -> Self {
        self.diverging = diverging;
        self
    }

    /// The category label column.
    pub fn name_key(&self) -> &str {
        &self.name_key
    }

    /// The primary value column.
    pub fn value_key(&self) -> &str {
        &self.value_key
    }

    /// The chart kind.
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    /// Extra columns stacked on top of the value column.
    pub fn stack_columns(&self) -> &[String] {
        &self.stack_columns
    }

    /// Whether stacked charts split into two sides.
    pub fn diverging(&self) -> bool {
        self.diverging
    }

    /// Columns on the negative (left or lower) side of a diverging chart, in selection order.
    pub fn left_columns(&self) -> &[String] {
        &self.left_columns
    }

    /// Columns on the positive (right or upper) side of a diverging chart, in selection order.
    pub fn right_columns(&self) -> &[String] {
        &self.right_columns
    }

    /// Whether numeric value labels are drawn.
    pub fn show_data_values(&self) -> bool {
        self.show_data_values
    }

    /// Returns `true` when the configuration draws a diverging stacked chart.
    pub fn is_diverging_stacked(&self) -> bool {
        self.diverging && self.kind.is_stacked()
    }

    /// Sets the chart kind. Column sets are kept so switching back restores them.
    pub fn set_kind(&mut self, kind: ChartKind) {
        self.kind = kind;
    }

    /// Toggles diverging stacks.
    pub fn set_diverging(&mut self, diverging: bool) {
        self.diverging = diverging;
    }

    /// Toggles value labels.
    pub fn set_show_data_values(&mut self, show: bool) {
        self.show_data_values = show;
    }

    /// Selects the category label column and re-prunes every column set.
    pub fn set_name_key(&mut self, dataset: &Dataset, key: impl Into<String>) {
        self.name_key = key.into();
        self.prune(dataset);
    }

    /// Selects the primary value column and re-prunes every column set.
    pub fn set_value_key(&mut self, dataset: &Dataset, key: impl Into<String>) {
        self.value_key = key.into();
        self.prune(dataset);
    }

    /// Replaces the stacked columns. Invalid or repeated columns are dropped.
    pub fn set_stack_columns<I, S>(&mut self, dataset: &Dataset, columns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stack_columns = dedup(columns);
        self.prune_stack(dataset);
    }

    /// Replaces the left-side columns.
    ///
    /// Columns already on the right side move to the left.
    pub fn set_left_columns<I, S>(&mut self, dataset: &Dataset, columns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.left_columns = dedup(columns);
        let name = &self.name_key;
        retain_logged(&mut self.left_columns, "left", |c| {
            c != name && dataset.is_numeric_column(c)
        });
        self.prune_right(dataset);
    }

    /// Replaces the right-side columns.
    ///
    /// Columns already on the left side move to the right.
    pub fn set_right_columns<I, S>(&mut self, dataset: &Dataset, columns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.right_columns = dedup(columns);
        let name = &self.name_key;
        retain_logged(&mut self.right_columns, "right", |c| {
            c != name && dataset.is_numeric_column(c)
        });
        self.prune_left(dataset);
    }

    /// Adopts a freshly loaded dataset.
    ///
    /// The first two columns become the name and value keys and every column set is cleared.
    /// The chart kind and the diverging toggle are kept.
    pub fn reset_for(&mut self, dataset: &Dataset) {
        if let [name, value, ..] = dataset.columns() {
            self.name_key.clone_from(name);
            self.value_key.clone_from(value);
            self.stack_columns.clear();
            self.left_columns.clear();
            self.right_columns.clear();
        }
        self.prune(dataset);
    }

    /// Restores the form defaults: bar chart, no diverging, no value labels, empty column sets.
    ///
    /// The name and value keys are kept.
    pub fn reset_form(&mut self) {
        self.kind = ChartKind::Bar;
        self.diverging = false;
        self.show_data_values = false;
        self.stack_columns.clear();
        self.left_columns.clear();
        self.right_columns.clear();
    }

    /// Drops every column-set member that is no longer valid for `dataset`.
    pub fn prune(&mut self, dataset: &Dataset) {
        self.prune_stack(dataset);
        self.prune_left(dataset);
        self.prune_right(dataset);
    }

    fn prune_stack(&mut self, dataset: &Dataset) {
        let (name, value) = (&self.name_key, &self.value_key);
        retain_logged(&mut self.stack_columns, "stack", |c| {
            c != name && c != value && dataset.is_numeric_column(c)
        });
    }

    fn prune_left(&mut self, dataset: &Dataset) {
        let (name, right) = (&self.name_key, &self.right_columns);
        retain_logged(&mut self.left_columns, "left", |c| {
            c != name && !right.iter().any(|r| r == c) && dataset.is_numeric_column(c)
        });
    }

    fn prune_right(&mut self, dataset: &Dataset) {
        let (name, left) = (&self.name_key, &self.left_columns);
        retain_logged(&mut self.right_columns, "right", |c| {
            c != name && !left.iter().any(|l| l == c) && dataset.is_numeric_column(c)
        });
    }

    /// Columns that may be stacked: numeric, and neither the name nor the value key.
    pub fn stack_candidates<'a>(&self, dataset: &'a Dataset) -> Vec<&'a str> {
        dataset
            .numeric_columns()
            .into_iter()
            .filter(|c| *c != self.name_key && *c != self.value_key)
            .collect()
    }

    /// Columns that may be put on the left side.
    pub fn left_candidates<'a>(&self, dataset: &'a Dataset) -> Vec<&'a str> {
        self.side_candidates(dataset, &self.right_columns)
    }

    /// Columns that may be put on the right side.
    pub fn right_candidates<'a>(&self, dataset: &'a Dataset) -> Vec<&'a str> {
        self.side_candidates(dataset, &self.left_columns)
    }

    fn side_candidates<'a>(&self, dataset: &'a Dataset, other: &[String]) -> Vec<&'a str> {
        dataset
            .numeric_columns()
            .into_iter()
            .filter(|c| *c != self.name_key && !other.iter().any(|o| o == c))
            .collect()
    }
}

fn dedup<I, S>(columns: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out: Vec<String> = Vec::new();
    for column in columns {
        let column = column.into();
        if !out.contains(&column) {
            out.push(column);
        }
    }
    out
}

fn retain_logged(set: &mut Vec<String>, which: &'static str, mut keep: impl FnMut(&str) -> bool) {
    set.retain(|c| {
        let kept = keep(c.as_str());
        if !kept {
            debug!(column = %c, set = which, "dropped invalid column selection");
        }
        kept
    });
}
