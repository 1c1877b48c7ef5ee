// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value-axis ticks, gridlines and category labels.
//!
//! Every cartesian chart has one value axis with [`TICK_COUNT`] intervals. Diverging charts
//! mirror the ticks on both sides of their zero line.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Point, Size};

use crate::format::Num;
use crate::kind::Orientation;
use crate::mark::{Mark, TextAnchor, TextBaseline};
use crate::rule_mark::RuleMarkSpec;
use crate::scale::{ScaleLinear, TICK_COUNT};
use crate::style::ChartStyle;
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// Gap between the axis and its labels.
const LABEL_GAP: f64 = 5.0;
/// Distance below the x axis at which labels sit.
const BELOW_AXIS: f64 = 15.0;

/// One resolved tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisTick {
    /// Plot-local coordinate along the value axis (y for vertical charts, x for horizontal).
    pub pos: f64,
    /// Label value.
    pub value: f64,
}

/// A resolved value axis.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueAxis {
    /// Orientation of the chart's categories; values run along the other axis.
    pub orientation: Orientation,
    /// Ticks in emission order.
    pub ticks: Vec<AxisTick>,
}

impl ValueAxis {
    /// Ticks from zero at the plot origin out to the end of the value extent.
    pub(crate) fn new(orientation: Orientation, scale: &ScaleLinear) -> Self {
        let ticks = scale
            .ticks()
            .into_iter()
            .map(|t| AxisTick {
                pos: along(orientation, 0.0, t.offset),
                value: t.value,
            })
            .collect();
        Self { orientation, ticks }
    }

    /// Ticks mirrored around a zero line at `zero`, with one `0` tick on the line itself.
    pub(crate) fn mirrored(orientation: Orientation, scale: &ScaleLinear, zero: f64) -> Self {
        let ticks = scale.ticks();
        let mut out = Vec::with_capacity(2 * TICK_COUNT + 1);
        out.push(AxisTick {
            pos: zero,
            value: 0.0,
        });
        for t in ticks.iter().skip(1) {
            out.push(AxisTick {
                pos: along(orientation, zero, t.offset),
                value: t.value,
            });
        }
        for t in ticks.iter().skip(1) {
            out.push(AxisTick {
                pos: along(orientation, zero, -t.offset),
                value: t.value,
            });
        }
        Self {
            orientation,
            ticks: out,
        }
    }

    /// Generates gridlines, tick labels and both domain lines.
    pub(crate) fn marks(&self, plot: Size, style: &ChartStyle) -> Vec<Mark> {
        let (w, h) = (plot.width, plot.height);
        let mut out = Vec::with_capacity(self.ticks.len() * 2 + 2);
        for tick in &self.ticks {
            let (grid, label) = match self.orientation {
                Orientation::Vertical => (
                    RuleMarkSpec::horizontal(tick.pos, 0.0, w),
                    TextMarkSpec::new(Point::new(-LABEL_GAP, tick.pos), Num(tick.value).to_string())
                        .with_anchor(TextAnchor::End)
                        .with_baseline(TextBaseline::Middle),
                ),
                Orientation::Horizontal => (
                    RuleMarkSpec::vertical(tick.pos, 0.0, -h),
                    TextMarkSpec::new(Point::new(tick.pos, BELOW_AXIS), Num(tick.value).to_string())
                        .with_anchor(TextAnchor::Middle),
                ),
            };
            out.push(
                grid.with_stroke(style.grid.clone())
                    .with_z_index(z_order::GRID_LINES)
                    .mark(),
            );
            out.push(
                label
                    .with_font_size(style.tick_font_size)
                    .with_fill(style.text_fill.clone())
                    .mark(),
            );
        }
        out.push(
            RuleMarkSpec::horizontal(0.0, 0.0, w)
                .with_stroke(style.axis.clone())
                .mark(),
        );
        out.push(
            RuleMarkSpec::vertical(0.0, 0.0, -h)
                .with_stroke(style.axis.clone())
                .mark(),
        );
        out
    }
}

/// Moves `offset` along the value direction from `zero`: upward (negative y) for vertical
/// charts, rightward for horizontal ones.
pub(crate) fn along(orientation: Orientation, zero: f64, offset: f64) -> f64 {
    match orientation {
        Orientation::Vertical => zero - offset,
        Orientation::Horizontal => zero + offset,
    }
}

/// A category label: rotated under the x axis for vertical charts, right-aligned left of the
/// y axis for horizontal ones.
pub(crate) fn category_label(
    orientation: Orientation,
    pos: Point,
    text: &str,
    style: &ChartStyle,
) -> Mark {
    let spec = TextMarkSpec::new(pos, String::from(text))
        .with_font_size(style.label_font_size)
        .with_fill(style.text_fill.clone());
    let spec = match orientation {
        Orientation::Vertical => spec
            .with_anchor(TextAnchor::Middle)
            .with_angle(style.category_label_angle),
        Orientation::Horizontal => spec
            .with_anchor(TextAnchor::End)
            .with_baseline(TextBaseline::Middle),
    };
    spec.mark()
}

/// Position of a category label for a band centered at `center` on the category axis.
pub(crate) fn category_label_pos(orientation: Orientation, center: f64) -> Point {
    match orientation {
        Orientation::Vertical => Point::new(center, BELOW_AXIS),
        Orientation::Horizontal => Point::new(-LABEL_GAP, center),
    }
}

/// Dashed guide through a band center, spanning the plot.
pub(crate) fn guide(orientation: Orientation, center: f64, plot: Size, style: &ChartStyle) -> Mark {
    let rule = match orientation {
        Orientation::Vertical => RuleMarkSpec::vertical(center, 0.0, -plot.height),
        Orientation::Horizontal => RuleMarkSpec::horizontal(center, 0.0, plot.width),
    };
    rule.with_stroke(style.guide.clone())
        .with_z_index(z_order::GRID_LINES)
        .mark()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn vertical_ticks_climb_upward() {
        let axis = ValueAxis::new(Orientation::Vertical, &ScaleLinear::new(30.0, 100.0));
        let pos: Vec<f64> = axis.ticks.iter().map(|t| t.pos).collect();
        assert_eq!(pos, vec![0.0, -20.0, -40.0, -60.0, -80.0, -100.0]);
        assert_eq!(axis.ticks[5].value, 30.0);
    }

    #[test]
    fn mirrored_ticks_have_a_single_zero() {
        let axis =
            ValueAxis::mirrored(Orientation::Horizontal, &ScaleLinear::new(20.0, 50.0), 50.0);
        assert_eq!(axis.ticks.len(), 11);
        assert_eq!(axis.ticks.iter().filter(|t| t.value == 0.0).count(), 1);
        assert_eq!(axis.ticks[5].pos, 100.0);
        assert_eq!(axis.ticks[10].pos, 0.0);
        assert_eq!(axis.ticks[10].value, 20.0);
    }

    #[test]
    fn axis_emits_grid_label_pairs_and_domain_lines() {
        let axis = ValueAxis::new(Orientation::Vertical, &ScaleLinear::new(5.0, 50.0));
        let marks = axis.marks(Size::new(200.0, 50.0), &ChartStyle::default());
        assert_eq!(marks.len(), 6 * 2 + 2);
        let labels: Vec<&str> = marks
            .iter()
            .filter_map(Mark::as_text)
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(labels, vec!["0", "1", "2", "3", "4", "5"]);
    }
}
