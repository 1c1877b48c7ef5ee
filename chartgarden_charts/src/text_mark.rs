// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text mark generation.

extern crate alloc;

use alloc::string::String;

use kurbo::Point;
use peniko::Brush;
use peniko::color::palette::css;

use crate::mark::{Mark, MarkPayload, TextAnchor, TextBaseline, TextPayload};

/// A text mark spec.
#[derive(Clone, Debug)]
pub struct TextMarkSpec {
    /// Anchor position in plot-local coordinates.
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font size.
    pub font_size: f64,
    /// Text rotation angle in degrees, around `pos`.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
    /// Rendering order hint ([`Mark::z_index`]).
    pub z_index: i32,
}

impl TextMarkSpec {
    /// Creates a new text mark spec with default styling.
    pub fn new(pos: Point, text: impl Into<String>) -> Self {
        Self {
            pos,
            text: text.into(),
            font_size: 12.0,
            angle: 0.0,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Alphabetic,
            fill: Brush::Solid(css::BLACK),
            z_index: crate::z_order::AXIS_LABELS,
        }
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the text anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the text baseline.
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the text rotation angle (degrees).
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
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
            MarkPayload::Text(TextPayload {
                pos: self.pos,
                text: self.text.clone(),
                font_size: self.font_size,
                angle: self.angle,
                anchor: self.anchor,
                baseline: self.baseline,
                fill: self.fill.clone(),
            }),
        )
    }
}
