// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained marks and the scene they are collected into.
//!
//! A [`Mark`] is a fully resolved drawing primitive in plot-local coordinates. Chart builders
//! emit marks; the SVG writer walks them in z-order.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use peniko::Brush;
use peniko::color::palette::css;

/// Horizontal text anchoring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the anchor point.
    #[default]
    Start,
    /// Text is centered on the anchor point.
    Middle,
    /// Text ends at the anchor point.
    End,
}

/// Vertical text alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The anchor point lies on the alphabetic baseline.
    #[default]
    Alphabetic,
    /// The anchor point lies on the vertical middle of the text.
    Middle,
}

/// Paint, width and optional dash pattern for stroked shapes.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width.
    pub stroke_width: f64,
    /// Dash and gap lengths, if dashed.
    pub dash: Option<(f64, f64)>,
}

impl StrokeStyle {
    /// A solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
            dash: None,
        }
    }

    /// A dashed stroke with equal dash and gap lengths.
    pub fn dashed(brush: impl Into<Brush>, stroke_width: f64, dash: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
            dash: Some((dash, dash)),
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// A filled (and optionally stroked) rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct RectPayload {
    /// Geometry.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
    /// Optional outline.
    pub stroke: Option<StrokeStyle>,
    /// Group opacity in `[0, 1]`.
    pub opacity: f64,
}

/// A straight line segment.
#[derive(Clone, Debug, PartialEq)]
pub struct RulePayload {
    /// Start point.
    pub p0: Point,
    /// End point.
    pub p1: Point,
    /// Stroke.
    pub stroke: StrokeStyle,
}

/// An annular (or full) circle sector. Angles are radians, increasing clockwise on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct SectorPayload {
    /// Center.
    pub center: Point,
    /// Inner radius (`0` for a pie slice).
    pub inner_radius: f64,
    /// Outer radius.
    pub outer_radius: f64,
    /// Start angle.
    pub start_angle: f64,
    /// End angle.
    pub end_angle: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Optional outline.
    pub stroke: Option<StrokeStyle>,
}

/// Connected straight segments, unfilled.
#[derive(Clone, Debug, PartialEq)]
pub struct PolylinePayload {
    /// Vertices in drawing order.
    pub points: Vec<Point>,
    /// Stroke.
    pub stroke: StrokeStyle,
}

/// A filled circle.
#[derive(Clone, Debug, PartialEq)]
pub struct CirclePayload {
    /// Center.
    pub center: Point,
    /// Radius.
    pub radius: f64,
    /// Fill paint.
    pub fill: Brush,
}

/// Unshaped text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPayload {
    /// Anchor position.
    pub pos: Point,
    /// Content.
    pub text: String,
    /// Font size.
    pub font_size: f64,
    /// Rotation around `pos`, in degrees.
    pub angle: f64,
    /// Horizontal anchoring.
    pub anchor: TextAnchor,
    /// Vertical alignment.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

/// The primitive carried by a [`Mark`].
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// Rectangle.
    Rect(RectPayload),
    /// Line segment.
    Rule(RulePayload),
    /// Pie or doughnut slice.
    Sector(SectorPayload),
    /// Polyline.
    Polyline(PolylinePayload),
    /// Circle.
    Circle(CirclePayload),
    /// Text.
    Text(TextPayload),
}

/// A drawing primitive plus its paint order.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Paint order; lower values are drawn first.
    pub z_index: i32,
    /// The primitive.
    pub payload: MarkPayload,
}

impl Mark {
    /// Creates a mark.
    pub fn new(z_index: i32, payload: MarkPayload) -> Self {
        Self { z_index, payload }
    }

    /// Returns the text payload, if this is a text mark.
    pub fn as_text(&self) -> Option<&TextPayload> {
        match &self.payload {
            MarkPayload::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// All marks of one chart, plus the document frame they are drawn into.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    view: Size,
    origin: Point,
    marks: Vec<Mark>,
}

impl Scene {
    /// Creates an empty scene for a document of size `view` whose marks are offset by `origin`.
    pub fn new(view: Size, origin: Point) -> Self {
        Self {
            view,
            origin,
            marks: Vec::new(),
        }
    }

    /// Document size.
    pub fn view(&self) -> Size {
        self.view
    }

    /// Document position of the mark coordinate origin.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Adds one mark.
    pub fn push(&mut self, mark: Mark) {
        self.marks.push(mark);
    }

    /// Adds marks in order.
    pub fn extend(&mut self, marks: impl IntoIterator<Item = Mark>) {
        self.marks.extend(marks);
    }

    /// Marks in insertion order.
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Marks in paint order: ascending z-index, insertion order within equal z-indexes.
    pub fn ordered(&self) -> Vec<&Mark> {
        let mut marks: Vec<&Mark> = self.marks.iter().collect();
        marks.sort_by_key(|m| m.z_index);
        marks
    }

    /// Text marks in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &TextPayload> {
        self.ordered().into_iter().filter_map(Mark::as_text)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn label(z: i32, text: &str) -> Mark {
        Mark::new(
            z,
            MarkPayload::Text(TextPayload {
                pos: Point::ZERO,
                text: text.into(),
                font_size: 12.0,
                angle: 0.0,
                anchor: TextAnchor::Start,
                baseline: TextBaseline::Alphabetic,
                fill: Brush::default(),
            }),
        )
    }

    #[test]
    fn ordering_is_stable_within_a_layer() {
        let mut scene = Scene::new(Size::new(10.0, 10.0), Point::ZERO);
        scene.extend([label(5, "b"), label(1, "a"), label(5, "c")]);
        let texts: std::vec::Vec<&str> = scene.texts().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["a", "b", "c"]);
    }
}
