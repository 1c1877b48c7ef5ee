// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diverging stacked bar charts.
//!
//! Two half-stacks grow away from a shared zero line, both scaled against the same maximum so
//! the sides stay comparable. The left (or lower) side stacks its columns in reverse selection
//! order so that the first selected column ends up outermost; the right (or upper) side stacks
//! in selection order. Colors follow selection order on both sides: left column `i` uses
//! palette entry `i`, right column `j` uses `left.len() + j`.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use chartgarden_table::Dataset;
use kurbo::{Point, Size};
use smallvec::SmallVec;

use crate::axis::{self, ValueAxis};
use crate::bar_chart::band_center;
use crate::config::ChartConfig;
use crate::kind::Orientation;
use crate::legend::{LegendEntry, stacked_legend};
use crate::mark::Mark;
use crate::rule_mark::RuleMarkSpec;
use crate::scale::{ScaleBand, ScaleLinear, zero_floor_max};
use crate::stacked_bar_chart::{
    MIN_LABEL_HEIGHT, MIN_LABEL_WIDTH, Segment, push_segment, stack_rect,
};
use crate::style::ChartStyle;
use crate::z_order;

/// One category's pair of half-stacks.
#[derive(Clone, Debug, PartialEq)]
pub struct DivergingRow {
    /// Category label.
    pub label: String,
    /// Anchor of the category label.
    pub label_pos: Point,
    /// Band center along the category axis.
    pub center: f64,
    /// Left/lower segments, from the zero line outward (reverse selection order).
    pub left: SmallVec<[Segment; 4]>,
    /// Right/upper segments, from the zero line outward (selection order).
    pub right: SmallVec<[Segment; 4]>,
}

/// Geometry of a diverging stacked chart.
#[derive(Clone, Debug, PartialEq)]
pub struct DivergingGeometry {
    /// Category-axis orientation.
    pub orientation: Orientation,
    /// Zero-floored maximum side total, shared by both sides.
    pub max_total: f64,
    /// Plot area size.
    pub plot: Size,
    /// Plot-local coordinate of the zero line along the value axis.
    pub zero: f64,
    /// Mirrored value axis.
    pub axis: ValueAxis,
    /// Legend rows: left columns then right columns, each in selection order.
    pub legend: Vec<LegendEntry>,
    /// Rows in dataset order.
    pub rows: Vec<DivergingRow>,
}

/// Which side of the zero line a half-stack grows toward.
#[derive(Clone, Copy)]
enum Side {
    Negative,
    Positive,
}

impl DivergingGeometry {
    pub(crate) fn compute(dataset: &Dataset, config: &ChartConfig, plot: Size) -> Self {
        let orientation = config.kind().orientation();
        let left = config.left_columns();
        let right = config.right_columns();

        let side_total =
            |row: usize, columns: &[String]| -> f64 {
                columns.iter().map(|c| dataset.f64_or_zero(row, c).abs()).sum()
            };
        let max_total = zero_floor_max(
            (0..dataset.len())
                .flat_map(|row| [side_total(row, left), side_total(row, right)]),
        );

        let (category_extent, half, zero, min_label) = match orientation {
            Orientation::Vertical => (
                plot.width,
                plot.height * 0.5,
                -plot.height * 0.5,
                MIN_LABEL_HEIGHT,
            ),
            Orientation::Horizontal => (
                plot.height,
                plot.width * 0.5,
                plot.width * 0.5,
                MIN_LABEL_WIDTH,
            ),
        };
        let band = ScaleBand::new(category_extent, dataset.len());
        let scale = ScaleLinear::new(max_total, half);
        let thickness = band.band_width();
        let show = config.show_data_values();

        let half_stack = |row: usize, center: f64, side: Side| -> SmallVec<[Segment; 4]> {
            let (order, sign): (Vec<(usize, &String)>, f64) = match side {
                Side::Negative => (left.iter().enumerate().rev().collect(), -1.0),
                Side::Positive => (
                    right
                        .iter()
                        .enumerate()
                        .map(|(j, c)| (left.len() + j, c))
                        .collect(),
                    1.0,
                ),
            };
            let mut cum = 0.0;
            let mut cum_px = 0.0;
            order
                .into_iter()
                .map(|(color_index, column)| {
                    let value = dataset.f64_or_zero(row, column);
                    let len = scale.map(value.abs());
                    let rect = stack_rect(
                        orientation,
                        zero,
                        sign * cum_px,
                        sign * len,
                        center,
                        thickness,
                    );
                    let segment = Segment {
                        column: column.clone(),
                        value,
                        start: cum,
                        rect,
                        color_index,
                        value_label: (show && len > min_label).then(|| rect.center()),
                    };
                    cum += value.abs();
                    cum_px += len;
                    segment
                })
                .collect()
        };

        let rows = dataset
            .labels(config.name_key())
            .into_iter()
            .enumerate()
            .map(|(row, label)| {
                let center = band_center(orientation, &band, row, plot);
                DivergingRow {
                    label,
                    label_pos: axis::category_label_pos(orientation, center),
                    center,
                    left: half_stack(row, center, Side::Negative),
                    right: half_stack(row, center, Side::Positive),
                }
            })
            .collect();

        let legend = left
            .iter()
            .enumerate()
            .map(|(i, c)| LegendEntry::new(format!("{c} (Left)"), i))
            .chain(
                right
                    .iter()
                    .enumerate()
                    .map(|(j, c)| LegendEntry::new(format!("{c} (Right)"), left.len() + j)),
            )
            .collect();

        Self {
            orientation,
            max_total,
            plot,
            zero,
            axis: ValueAxis::mirrored(orientation, &scale, zero),
            legend,
            rows,
        }
    }

    pub(crate) fn marks(&self, style: &ChartStyle) -> Vec<Mark> {
        let mut out = self.axis.marks(self.plot, style);
        let center_line = match self.orientation {
            Orientation::Vertical => RuleMarkSpec::horizontal(self.zero, 0.0, self.plot.width),
            Orientation::Horizontal => RuleMarkSpec::vertical(self.zero, 0.0, -self.plot.height),
        };
        out.push(
            center_line
                .with_stroke(style.center_line.clone())
                .with_z_index(z_order::AXIS_RULES)
                .mark(),
        );
        for row in &self.rows {
            out.push(axis::guide(self.orientation, row.center, self.plot, style));
            for segment in row.left.iter().chain(&row.right) {
                push_segment(&mut out, segment, style);
            }
            out.push(axis::category_label(
                self.orientation,
                row.label_pos,
                &row.label,
                style,
            ));
        }
        out.extend(stacked_legend(&self.legend, self.plot).marks());
        out
    }
}
