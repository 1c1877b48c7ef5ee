// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rule (line segment) mark generation.

use kurbo::Point;

use crate::mark::{Mark, MarkPayload, RulePayload, StrokeStyle};

/// A rule mark spec: a single straight segment, used for gridlines, guides and axis lines.
#[derive(Clone, Debug)]
pub struct RuleMarkSpec {
    /// Start point.
    pub p0: Point,
    /// End point.
    pub p1: Point,
    /// Stroke style.
    pub stroke: StrokeStyle,
    /// Rendering order hint ([`Mark::z_index`]).
    pub z_index: i32,
}

impl RuleMarkSpec {
    /// Creates a rule from `p0` to `p1`.
    pub fn new(p0: Point, p1: Point) -> Self {
        Self {
            p0,
            p1,
            stroke: StrokeStyle::default(),
            z_index: crate::z_order::AXIS_RULES,
        }
    }

    /// Creates a horizontal rule at `y` from `x0` to `x1`.
    pub fn horizontal(y: f64, x0: f64, x1: f64) -> Self {
        Self::new(Point::new(x0, y), Point::new(x1, y))
    }

    /// Creates a vertical rule at `x` from `y0` to `y1`.
    pub fn vertical(x: f64, y0: f64, y1: f64) -> Self {
        Self::new(Point::new(x, y0), Point::new(x, y1))
    }

    /// Sets the stroke style.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the mark.
    pub fn mark(&self) -> Mark {
        Mark::new(
            self.z_index,
            MarkPayload::Rule(RulePayload {
                p0: self.p0,
                p1: self.p1,
                stroke: self.stroke.clone(),
            }),
        )
    }
}
