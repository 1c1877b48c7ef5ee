// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point (circle marker) mark generation.

use kurbo::Point;
use peniko::Brush;

use crate::mark::{CirclePayload, Mark, MarkPayload};

/// A circular point marker.
#[derive(Clone, Debug)]
pub struct PointMarkSpec {
    /// Center.
    pub center: Point,
    /// Radius.
    pub radius: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Rendering order hint ([`Mark::z_index`]).
    pub z_index: i32,
}

impl PointMarkSpec {
    /// Creates a point marker of radius 4.
    pub fn new(center: Point) -> Self {
        Self {
            center,
            radius: 4.0,
            fill: Brush::default(),
            z_index: crate::z_order::SERIES_POINTS,
        }
    }

    /// Sets the radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Generates the mark.
    pub fn mark(&self) -> Mark {
        Mark::new(
            self.z_index,
            MarkPayload::Circle(CirclePayload {
                center: self.center,
                radius: self.radius,
                fill: self.fill.clone(),
            }),
        )
    }
}
