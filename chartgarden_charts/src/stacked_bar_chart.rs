// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacked bar charts with one cumulative stack per category.
//!
//! The stacked columns are `[value_key, ..stack_columns]`, in that order. Each category gets
//! one segment per column; segment `k` starts where segments `0..k` end.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use chartgarden_table::Dataset;
use kurbo::{Point, Rect, Size};
use smallvec::SmallVec;

use crate::axis::{self, ValueAxis};
use crate::bar_chart::band_center;
use crate::config::ChartConfig;
use crate::format::Num;
use crate::kind::Orientation;
use crate::legend::{LegendEntry, stacked_legend};
use crate::mark::{Mark, TextAnchor, TextBaseline};
use crate::palette::series_color;
use crate::rect_mark::RectMarkSpec;
use crate::scale::{ScaleBand, ScaleLinear, zero_floor_max};
use crate::style::ChartStyle;
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// Minimum segment width for an inset value label on horizontal stacks.
pub(crate) const MIN_LABEL_WIDTH: f64 = 30.0;
/// Minimum segment height for an inset value label on vertical stacks.
pub(crate) const MIN_LABEL_HEIGHT: f64 = 20.0;

/// One stacked segment.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    /// Source column.
    pub column: String,
    /// Data value (missing or non-numeric cells count as `0`).
    pub value: f64,
    /// Cumulative value stacked before this segment, measured from the zero line.
    pub start: f64,
    /// Segment rectangle.
    pub rect: Rect,
    /// Palette index.
    pub color_index: usize,
    /// Center of the inset value label, when enabled and the segment is large enough.
    pub value_label: Option<Point>,
}

/// One category's stack.
#[derive(Clone, Debug, PartialEq)]
pub struct StackedRow {
    /// Category label.
    pub label: String,
    /// Anchor of the category label.
    pub label_pos: Point,
    /// Band center along the category axis.
    pub center: f64,
    /// Sum of all segment values.
    pub total: f64,
    /// Segments from the zero line outward.
    pub segments: SmallVec<[Segment; 4]>,
}

/// Geometry of a non-diverging stacked chart.
#[derive(Clone, Debug, PartialEq)]
pub struct StackedGeometry {
    /// Category-axis orientation.
    pub orientation: Orientation,
    /// Zero-floored maximum stack total.
    pub max_total: f64,
    /// Plot area size.
    pub plot: Size,
    /// Value axis.
    pub axis: ValueAxis,
    /// Legend rows, one per stacked column.
    pub legend: Vec<LegendEntry>,
    /// Stacks in dataset order.
    pub rows: Vec<StackedRow>,
}

impl StackedGeometry {
    pub(crate) fn compute(dataset: &Dataset, config: &ChartConfig, plot: Size) -> Self {
        let orientation = config.kind().orientation();
        let columns: Vec<&str> = core::iter::once(config.value_key())
            .chain(config.stack_columns().iter().map(String::as_str))
            .collect();
        let totals: Vec<f64> = (0..dataset.len())
            .map(|row| columns.iter().map(|c| dataset.f64_or_zero(row, c)).sum::<f64>())
            .collect();
        let max_total = zero_floor_max(totals.iter().copied());

        let (category_extent, value_extent, min_label) = match orientation {
            Orientation::Vertical => (plot.width, plot.height, MIN_LABEL_HEIGHT),
            Orientation::Horizontal => (plot.height, plot.width, MIN_LABEL_WIDTH),
        };
        let band = ScaleBand::new(category_extent, dataset.len());
        let scale = ScaleLinear::new(max_total, value_extent);
        let thickness = band.band_width();

        let rows = dataset
            .labels(config.name_key())
            .into_iter()
            .zip(totals)
            .enumerate()
            .map(|(row, (label, total))| {
                let center = band_center(orientation, &band, row, plot);
                let mut cum = 0.0;
                let mut cum_px = 0.0;
                let segments = columns
                    .iter()
                    .enumerate()
                    .map(|(k, column)| {
                        let value = dataset.f64_or_zero(row, column);
                        let len = scale.map(value);
                        let rect = stack_rect(orientation, 0.0, cum_px, len, center, thickness);
                        let segment = Segment {
                            column: String::from(*column),
                            value,
                            start: cum,
                            rect,
                            color_index: k,
                            value_label: (config.show_data_values() && len > min_label)
                                .then(|| rect.center()),
                        };
                        cum += value;
                        cum_px += len;
                        segment
                    })
                    .collect();
                StackedRow {
                    label,
                    label_pos: axis::category_label_pos(orientation, center),
                    center,
                    total,
                    segments,
                }
            })
            .collect();

        Self {
            orientation,
            max_total,
            plot,
            axis: ValueAxis::new(orientation, &scale),
            legend: columns
                .iter()
                .enumerate()
                .map(|(k, c)| LegendEntry::new(*c, k))
                .collect(),
            rows,
        }
    }

    pub(crate) fn marks(&self, style: &ChartStyle) -> Vec<Mark> {
        let mut out = self.axis.marks(self.plot, style);
        for row in &self.rows {
            if self.orientation == Orientation::Vertical {
                out.push(axis::guide(self.orientation, row.center, self.plot, style));
            }
            for segment in &row.segments {
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

/// Rectangle for a stack segment covering `[start, start + len]` pixels from `zero`.
///
/// A negative `start`/`len` pair grows against the value direction, which is how the left
/// half of a diverging chart is drawn.
pub(crate) fn stack_rect(
    orientation: Orientation,
    zero: f64,
    start: f64,
    len: f64,
    center: f64,
    thickness: f64,
) -> Rect {
    let a = axis::along(orientation, zero, start);
    let b = axis::along(orientation, zero, start + len);
    let (c0, c1) = (center - thickness * 0.5, center + thickness * 0.5);
    let rect = match orientation {
        Orientation::Vertical => Rect::new(c0, a, c1, b),
        Orientation::Horizontal => Rect::new(a, c0, b, c1),
    };
    rect.abs()
}

/// Pushes a segment's rectangle and, if present, its inset value label.
pub(crate) fn push_segment(out: &mut Vec<Mark>, segment: &Segment, style: &ChartStyle) {
    out.push(
        RectMarkSpec::new(segment.rect)
            .with_fill(series_color(segment.color_index))
            .with_stroke(style.segment_stroke.clone())
            .mark(),
    );
    if let Some(pos) = segment.value_label {
        out.push(
            TextMarkSpec::new(pos, Num(segment.value).to_string())
                .with_font_size(style.inset_value_font_size)
                .with_fill(style.inset_value_fill.clone())
                .with_anchor(TextAnchor::Middle)
                .with_baseline(TextBaseline::Middle)
                .with_z_index(z_order::VALUE_LABELS)
                .mark(),
        );
    }
}
