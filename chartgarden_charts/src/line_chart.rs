// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line charts: evenly spaced categories joined by straight segments.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use chartgarden_table::Dataset;
use kurbo::{Point, Size};

use crate::axis::{self, ValueAxis};
use crate::config::ChartConfig;
use crate::format::Num;
use crate::kind::Orientation;
use crate::line_mark::LineMarkSpec;
use crate::mark::{Mark, TextAnchor};
use crate::point_mark::PointMarkSpec;
use crate::scale::{ScaleLinear, ScalePoint, zero_floor_max};
use crate::style::ChartStyle;
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// Gap between a point and its value label.
const VALUE_GAP: f64 = 10.0;

/// One data point.
#[derive(Clone, Debug, PartialEq)]
pub struct LinePoint {
    /// Category label.
    pub label: String,
    /// Data value (missing or non-numeric cells count as `0`).
    pub value: f64,
    /// Position in plot-local coordinates.
    pub pos: Point,
    /// Anchor of the category label.
    pub label_pos: Point,
    /// Anchor of the value label, when enabled.
    pub value_label: Option<Point>,
}

/// Geometry of a line chart.
#[derive(Clone, Debug, PartialEq)]
pub struct LineGeometry {
    /// Zero-floored maximum value.
    pub max_value: f64,
    /// Plot area size.
    pub plot: Size,
    /// Value axis.
    pub axis: ValueAxis,
    /// Points in dataset order.
    pub points: Vec<LinePoint>,
}

impl LineGeometry {
    pub(crate) fn compute(dataset: &Dataset, config: &ChartConfig, plot: Size) -> Self {
        let values = dataset.values_or_zero(config.value_key());
        let max_value = zero_floor_max(values.iter().copied());
        let x = ScalePoint::new(plot.width, values.len());
        let y = ScaleLinear::new(max_value, plot.height);

        let points = dataset
            .labels(config.name_key())
            .into_iter()
            .zip(values)
            .enumerate()
            .map(|(i, (label, value))| {
                let pos = Point::new(x.x(i), -y.map(value));
                LinePoint {
                    label,
                    value,
                    pos,
                    label_pos: axis::category_label_pos(Orientation::Vertical, pos.x),
                    value_label: config
                        .show_data_values()
                        .then(|| Point::new(pos.x, pos.y - VALUE_GAP)),
                }
            })
            .collect();

        Self {
            max_value,
            plot,
            axis: ValueAxis::new(Orientation::Vertical, &y),
            points,
        }
    }

    pub(crate) fn marks(&self, style: &ChartStyle) -> Vec<Mark> {
        let mut out = self.axis.marks(self.plot, style);
        for p in &self.points {
            out.push(axis::guide(Orientation::Vertical, p.pos.x, self.plot, style));
        }
        out.push(
            LineMarkSpec::new(self.points.iter().map(|p| p.pos))
                .with_stroke(style.line_stroke.clone())
                .mark(),
        );
        for p in &self.points {
            out.push(
                PointMarkSpec::new(p.pos)
                    .with_radius(style.point_radius)
                    .with_fill(style.point_fill.clone())
                    .mark(),
            );
            out.push(axis::category_label(
                Orientation::Vertical,
                p.label_pos,
                &p.label,
                style,
            ));
            if let Some(pos) = p.value_label {
                out.push(
                    TextMarkSpec::new(pos, Num(p.value).to_string())
                        .with_font_size(style.value_font_size)
                        .with_fill(style.text_fill.clone())
                        .with_anchor(TextAnchor::Middle)
                        .with_z_index(z_order::VALUE_LABELS)
                        .mark(),
                );
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use approx::assert_relative_eq;
    use chartgarden_table::Value;

    use super::*;

    #[test]
    fn points_span_the_plot_width() {
        let mut ds = Dataset::new(["name", "value"]);
        for (n, v) in [("Mon", 5.0), ("Tue", 10.0), ("Wed", 0.0)] {
            ds.push_row([Value::from(n), Value::Number(v)]);
        }
        let geom = LineGeometry::compute(&ds, &ChartConfig::new(), Size::new(400.0, 200.0));
        assert_relative_eq!(geom.points[0].pos.x, 0.0);
        assert_relative_eq!(geom.points[1].pos.x, 200.0);
        assert_relative_eq!(geom.points[2].pos.x, 400.0);
        assert_relative_eq!(geom.points[0].pos.y, -100.0);
        assert_relative_eq!(geom.points[1].pos.y, -200.0);
    }

    #[test]
    fn single_point_sits_on_the_y_axis() {
        let mut ds = Dataset::new(["name", "value"]);
        ds.push_row([Value::from("only"), Value::Number(3.0)]);
        let config = ChartConfig::new().with_show_data_values(true);
        let geom = LineGeometry::compute(&ds, &config, Size::new(400.0, 200.0));
        assert_eq!(geom.points[0].pos.x, 0.0);
        let label = geom.points[0].value_label.expect("value labels enabled");
        assert_relative_eq!(label.y, -210.0);
    }
}
