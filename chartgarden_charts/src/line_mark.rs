// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polyline mark generation.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;

use crate::mark::{Mark, MarkPayload, PolylinePayload, StrokeStyle};

/// A line mark spec: straight segments through the given points, never curve-fit.
#[derive(Clone, Debug)]
pub struct LineMarkSpec {
    /// Vertices in drawing order.
    pub points: Vec<Point>,
    /// Stroke style.
    pub stroke: StrokeStyle,
    /// Rendering order hint ([`Mark::z_index`]).
    pub z_index: i32,
}

impl LineMarkSpec {
    /// Creates a line through `points`.
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().collect(),
            stroke: StrokeStyle::default(),
            z_index: crate::z_order::SERIES_STROKE,
        }
    }

    /// Sets the stroke style.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Generates the mark.
    pub fn mark(&self) -> Mark {
        Mark::new(
            self.z_index,
            MarkPayload::Polyline(PolylinePayload {
                points: self.points.clone(),
                stroke: self.stroke.clone(),
            }),
        )
    }
}
