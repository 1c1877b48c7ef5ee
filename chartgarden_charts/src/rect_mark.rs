// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle mark generation.

use kurbo::Rect;
use peniko::Brush;

use crate::mark::{Mark, MarkPayload, RectPayload, StrokeStyle};

/// A rectangle mark spec.
#[derive(Clone, Debug)]
pub struct RectMarkSpec {
    /// Rectangle geometry in plot-local coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
    /// Optional outline.
    pub stroke: Option<StrokeStyle>,
    /// Opacity applied to fill and outline.
    pub opacity: f64,
    /// Rendering order hint ([`Mark::z_index`]).
    pub z_index: i32,
}

impl RectMarkSpec {
    /// Creates a new rectangle mark spec. Inverted rectangles are normalized.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect: rect.abs(),
            fill: Brush::default(),
            stroke: None,
            opacity: 1.0,
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

    /// Sets the opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
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
            MarkPayload::Rect(RectPayload {
                rect: self.rect,
                fill: self.fill.clone(),
                stroke: self.stroke.clone(),
                opacity: self.opacity,
            }),
        )
    }
}
