// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-series bar charts, vertical and horizontal.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use chartgarden_table::Dataset;
use kurbo::{Point, Rect, Size};

use crate::axis::{self, ValueAxis};
use crate::config::ChartConfig;
use crate::format::Num;
use crate::kind::Orientation;
use crate::mark::{Mark, TextAnchor, TextBaseline};
use crate::palette::series_color;
use crate::rect_mark::RectMarkSpec;
use crate::scale::{ScaleBand, ScaleLinear, zero_floor_max};
use crate::style::ChartStyle;
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// Gap between a bar's end and its value label.
const VALUE_GAP: f64 = 5.0;

/// One bar.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    /// Category label.
    pub label: String,
    /// Data value (missing or non-numeric cells count as `0`).
    pub value: f64,
    /// Bar rectangle; zero-length for a non-positive scale maximum.
    pub rect: Rect,
    /// Palette index.
    pub color_index: usize,
    /// Anchor of the category label.
    pub label_pos: Point,
    /// Anchor of the value label, when value labels are enabled.
    pub value_label: Option<Point>,
}

/// Geometry of a bar or horizontal bar chart.
#[derive(Clone, Debug, PartialEq)]
pub struct BarGeometry {
    /// Category-axis orientation.
    pub orientation: Orientation,
    /// Zero-floored maximum value.
    pub max_value: f64,
    /// Plot area size.
    pub plot: Size,
    /// Value axis.
    pub axis: ValueAxis,
    /// Bars in dataset order.
    pub bars: Vec<Bar>,
}

impl BarGeometry {
    pub(crate) fn compute(dataset: &Dataset, config: &ChartConfig, plot: Size) -> Self {
        let orientation = config.kind().orientation();
        let labels = dataset.labels(config.name_key());
        let values = dataset.values_or_zero(config.value_key());
        let max_value = zero_floor_max(values.iter().copied());

        let (category_extent, value_extent) = match orientation {
            Orientation::Vertical => (plot.width, plot.height),
            Orientation::Horizontal => (plot.height, plot.width),
        };
        let band = ScaleBand::new(category_extent, labels.len());
        let scale = ScaleLinear::new(max_value, value_extent);
        let thickness = band.band_width();

        let bars = labels
            .into_iter()
            .zip(values)
            .enumerate()
            .map(|(i, (label, value))| {
                let len = scale.map(value);
                let center = band_center(orientation, &band, i, plot);
                let (rect, value_pos) = match orientation {
                    Orientation::Vertical => {
                        let x0 = band.x(i);
                        (
                            Rect::new(x0, -len, x0 + thickness, 0.0),
                            Point::new(center, -len - VALUE_GAP),
                        )
                    }
                    Orientation::Horizontal => {
                        let y0 = center - thickness * 0.5;
                        (
                            Rect::new(0.0, y0, len, y0 + thickness),
                            Point::new(len + VALUE_GAP, center),
                        )
                    }
                };
                Bar {
                    label,
                    value,
                    rect: rect.abs(),
                    color_index: i,
                    label_pos: axis::category_label_pos(orientation, center),
                    value_label: config.show_data_values().then_some(value_pos),
                }
            })
            .collect();

        Self {
            orientation,
            max_value,
            plot,
            axis: ValueAxis::new(orientation, &scale),
            bars,
        }
    }

    pub(crate) fn marks(&self, style: &ChartStyle) -> Vec<Mark> {
        let mut out = self.axis.marks(self.plot, style);
        for bar in &self.bars {
            out.push(
                RectMarkSpec::new(bar.rect)
                    .with_fill(series_color(bar.color_index))
                    .mark(),
            );
            out.push(axis::category_label(
                self.orientation,
                bar.label_pos,
                &bar.label,
                style,
            ));
            if let Some(pos) = bar.value_label {
                let spec = TextMarkSpec::new(pos, Num(bar.value).to_string())
                    .with_font_size(style.value_font_size)
                    .with_fill(style.text_fill.clone())
                    .with_z_index(z_order::VALUE_LABELS);
                let spec = match self.orientation {
                    Orientation::Vertical => spec.with_anchor(TextAnchor::Middle),
                    Orientation::Horizontal => spec
                        .with_anchor(TextAnchor::Start)
                        .with_baseline(TextBaseline::Middle),
                };
                out.push(spec.mark());
            }
        }
        out
    }
}

/// Plot-local coordinate of the middle of band `index` along the category axis.
///
/// Horizontal charts lay bands top-down starting at `-plot.height`.
pub(crate) fn band_center(orientation: Orientation, band: &ScaleBand, index: usize, plot: Size) -> f64 {
    match orientation {
        Orientation::Vertical => band.center(index),
        Orientation::Horizontal => -plot.height + band.center(index),
    }
}
