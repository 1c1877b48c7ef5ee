// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie and doughnut charts.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::f64::consts::TAU;

use chartgarden_table::Dataset;
use kurbo::{Point, Vec2};

use crate::config::ChartConfig;
use crate::format::Num;
use crate::kind::ChartKind;
use crate::layout::ChartLayout;
use crate::mark::{Mark, TextAnchor, TextBaseline};
use crate::palette::series_color;
use crate::sector_mark::SectorMarkSpec;
use crate::style::ChartStyle;
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// Outer radius as a fraction of half the smaller canvas side.
const RADIUS_FRACTION: f64 = 0.7;
/// Doughnut hole radius as a fraction of the outer radius.
const DOUGHNUT_HOLE: f64 = 0.5;
/// Name labels sit this far outside the ring's mid radius.
const LABEL_OFFSET: f64 = 20.0;
/// Value labels sit this far inside the name label radius.
const VALUE_INSET: f64 = 15.0;
/// Minimum share for a name label.
const MIN_NAME_SHARE: f64 = 0.05;
/// Minimum share for a value label.
const MIN_VALUE_SHARE: f64 = 0.08;

/// One slice.
#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    /// Category label.
    pub label: String,
    /// Data value (missing or non-numeric cells count as `0`).
    pub value: f64,
    /// Fraction of the total; `0` when the total is not positive.
    pub share: f64,
    /// Start angle in radians.
    pub start_angle: f64,
    /// End angle in radians.
    pub end_angle: f64,
    /// Palette index.
    pub color_index: usize,
    /// Name label anchor, relative to the center, when the slice is large enough.
    pub name_label: Option<Point>,
    /// Value label anchor, relative to the center, when enabled and the slice is large enough.
    pub value_label: Option<Point>,
}

impl Slice {
    /// Angular span.
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// Geometry of a pie or doughnut chart.
#[derive(Clone, Debug, PartialEq)]
pub struct SectorGeometry {
    /// Document position of the center.
    pub center: Point,
    /// Outer radius.
    pub outer_radius: f64,
    /// Inner radius (`0` for a pie).
    pub inner_radius: f64,
    /// Sum of all values.
    pub total: f64,
    /// Slices in dataset order, laid out clockwise from angle `0`.
    pub slices: Vec<Slice>,
}

impl SectorGeometry {
    pub(crate) fn compute(dataset: &Dataset, config: &ChartConfig, layout: &ChartLayout) -> Self {
        let outer_radius =
            layout.canvas.width.min(layout.canvas.height) * 0.5 * RADIUS_FRACTION;
        let inner_radius = if config.kind() == ChartKind::Doughnut {
            outer_radius * DOUGHNUT_HOLE
        } else {
            0.0
        };
        let values = dataset.values_or_zero(config.value_key());
        let total: f64 = values.iter().sum();
        let label_radius = (outer_radius + inner_radius) * 0.5 + LABEL_OFFSET;

        let mut start_angle = 0.0;
        let slices = dataset
            .labels(config.name_key())
            .into_iter()
            .zip(values)
            .enumerate()
            .map(|(i, (label, value))| {
                let share = if total > 0.0 { value / total } else { 0.0 };
                let end_angle = start_angle + share * TAU;
                let mid = Vec2::from_angle(start_angle + (end_angle - start_angle) * 0.5);
                let named = share > MIN_NAME_SHARE;
                let slice = Slice {
                    label,
                    value,
                    share,
                    start_angle,
                    end_angle,
                    color_index: i,
                    name_label: named.then(|| (mid * label_radius).to_point()),
                    value_label: (named && config.show_data_values() && share > MIN_VALUE_SHARE)
                        .then(|| (mid * (label_radius - VALUE_INSET)).to_point()),
                };
                start_angle = end_angle;
                slice
            })
            .collect();

        Self {
            center: layout.view_center(),
            outer_radius,
            inner_radius,
            total,
            slices,
        }
    }

    pub(crate) fn marks(&self, style: &ChartStyle) -> Vec<Mark> {
        let mut out = Vec::with_capacity(self.slices.len() * 3);
        for slice in &self.slices {
            out.push(
                SectorMarkSpec::new(
                    Point::ZERO,
                    self.inner_radius,
                    self.outer_radius,
                    slice.start_angle,
                    slice.end_angle,
                )
                .with_fill(series_color(slice.color_index))
                .with_stroke(style.slice_stroke.clone())
                .mark(),
            );
            if let Some(pos) = slice.name_label {
                out.push(
                    TextMarkSpec::new(pos, slice.label.clone())
                        .with_font_size(style.label_font_size)
                        .with_fill(style.text_fill.clone())
                        .with_anchor(TextAnchor::Middle)
                        .with_baseline(TextBaseline::Middle)
                        .mark(),
                );
            }
            if let Some(pos) = slice.value_label {
                out.push(
                    TextMarkSpec::new(pos, Num(slice.value).to_string())
                        .with_font_size(style.inset_value_font_size)
                        .with_fill(style.text_fill.clone())
                        .with_anchor(TextAnchor::Middle)
                        .with_baseline(TextBaseline::Middle)
                        .with_z_index(z_order::VALUE_LABELS)
                        .mark(),
                );
            }
        }
        out
    }
}
