// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sector (arc) mark generation for pie and doughnut slices.

use kurbo::Point;
use peniko::Brush;

use crate::mark::{Mark, MarkPayload, SectorPayload, StrokeStyle};

/// A sector (arc slice), suitable for pie/doughnut charts.
///
/// Angles are in radians, starting at the positive x axis and increasing clockwise on screen.
#[derive(Clone, Debug)]
pub struct SectorMarkSpec {
    /// Center.
    pub center: Point,
    /// Inner radius (0 for a pie slice).
    pub inner_radius: f64,
    /// Outer radius.
    pub outer_radius: f64,
    /// Start angle in radians.
    pub start_angle: f64,
    /// End angle in radians.
    pub end_angle: f64,
    /// Fill paint for the sector.
    pub fill: Brush,
    /// Optional outline stroke.
    pub stroke: Option<StrokeStyle>,
    /// Rendering order hint ([`Mark::z_index`]).
    pub z_index: i32,
}

impl SectorMarkSpec {
    /// Creates a new sector mark spec.
    pub fn new(
        center: Point,
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Self {
        Self {
            center,
            inner_radius,
            outer_radius,
            start_angle,
            end_angle,
            fill: Brush::default(),
            stroke: None,
            z_index: crate::z_order::SERIES_FILL,
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the outline stroke.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
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
            MarkPayload::Sector(SectorPayload {
                center: self.center,
                inner_radius: self.inner_radius,
                outer_radius: self.outer_radius,
                start_angle: self.start_angle,
                end_angle: self.end_angle,
                fill: self.fill.clone(),
                stroke: self.stroke.clone(),
            }),
        )
    }
}
