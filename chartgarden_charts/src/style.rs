// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fixed stylesheet applied by the renderer.

use peniko::Brush;
use peniko::color::palette::css;

use crate::mark::StrokeStyle;
use crate::palette::{GRID_COLOR, LINE_COLOR};

/// Stroke widths, font sizes and paints used for exported charts.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartStyle {
    /// Value-axis gridlines.
    pub grid: StrokeStyle,
    /// Dashed per-category guides.
    pub guide: StrokeStyle,
    /// Axis domain lines.
    pub axis: StrokeStyle,
    /// The dashed zero line of diverging charts.
    pub center_line: StrokeStyle,
    /// Tick label font size.
    pub tick_font_size: f64,
    /// Category and name label font size.
    pub label_font_size: f64,
    /// Value label font size for bars and points.
    pub value_font_size: f64,
    /// Value label font size inside stacked segments and slices.
    pub inset_value_font_size: f64,
    /// Default text paint.
    pub text_fill: Brush,
    /// Paint for value labels drawn inside stacked segments.
    pub inset_value_fill: Brush,
    /// Rotation of category labels under a vertical category axis, in degrees.
    pub category_label_angle: f64,
    /// Outline of stacked segments.
    pub segment_stroke: StrokeStyle,
    /// Outline of pie slices.
    pub slice_stroke: StrokeStyle,
    /// Line chart stroke.
    pub line_stroke: StrokeStyle,
    /// Line chart marker radius.
    pub point_radius: f64,
    /// Line chart marker paint.
    pub point_fill: Brush,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            grid: StrokeStyle::solid(GRID_COLOR, 1.0),
            guide: StrokeStyle::dashed(GRID_COLOR, 1.0, 3.0),
            axis: StrokeStyle::solid(css::BLACK, 1.0),
            center_line: StrokeStyle::dashed(css::BLACK, 1.0, 3.0),
            tick_font_size: 10.0,
            label_font_size: 12.0,
            value_font_size: 12.0,
            inset_value_font_size: 11.0,
            text_fill: Brush::Solid(css::BLACK),
            inset_value_fill: Brush::Solid(css::WHITE),
            category_label_angle: -45.0,
            segment_stroke: StrokeStyle::solid(css::WHITE, 0.5),
            slice_stroke: StrokeStyle::solid(css::WHITE, 1.0),
            line_stroke: StrokeStyle::solid(LINE_COLOR, 2.0),
            point_radius: 4.0,
            point_fill: Brush::Solid(LINE_COLOR),
        }
    }
}
