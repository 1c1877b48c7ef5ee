// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document and plot-area layout.
//!
//! Exported documents are larger than the chart canvas: extra margins leave room for rotated
//! category labels, tick labels and the legend. All series geometry is expressed in
//! *plot-local* coordinates whose origin is the bottom-left corner of the plot area, with y
//! growing upward as negative numbers.

use kurbo::{Point, Size};

/// Per-side margin amounts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    /// Left margin.
    pub left: f64,
    /// Right margin.
    pub right: f64,
    /// Top margin.
    pub top: f64,
    /// Bottom margin.
    pub bottom: f64,
}

/// Target canvas size for a chart, before export margins are added.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSize {
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 500.0,
        }
    }
}

impl CanvasSize {
    /// Creates a canvas size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Sets the width.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Sets the height.
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Returns the size as a `kurbo::Size`.
    pub fn to_size(self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl From<CanvasSize> for Size {
    fn from(canvas: CanvasSize) -> Self {
        canvas.to_size()
    }
}

/// Layout constants for exported documents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayoutSpec {
    /// Padding between the canvas edge and the plot area, on every side.
    pub padding: f64,
    /// Extra document margins around the canvas.
    pub extra: Margins,
}

impl Default for ChartLayoutSpec {
    fn default() -> Self {
        Self {
            padding: 30.0,
            extra: Margins {
                left: 80.0,
                right: 120.0,
                top: 50.0,
                bottom: 80.0,
            },
        }
    }
}

impl ChartLayoutSpec {
    /// Sets the plot padding.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the extra document margins.
    pub fn with_extra(mut self, extra: Margins) -> Self {
        self.extra = extra;
        self
    }

    /// Arranges the document around a canvas of the given size.
    pub fn arrange(&self, canvas: impl Into<Size>) -> ChartLayout {
        let canvas = canvas.into();
        let view = Size::new(
            canvas.width + self.extra.left + self.extra.right,
            canvas.height + self.extra.top + self.extra.bottom,
        );
        let origin = Point::new(
            self.padding + self.extra.left,
            view.height - (self.padding + self.extra.top),
        );
        let plot = Size::new(
            (canvas.width - 2.0 * self.padding).max(0.0),
            (canvas.height - 2.0 * self.padding).max(0.0),
        );
        ChartLayout {
            canvas,
            view,
            origin,
            plot,
        }
    }
}

/// Output of [`ChartLayoutSpec::arrange`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    /// The canvas the chart was laid out for.
    pub canvas: Size,
    /// Full document size.
    pub view: Size,
    /// Document position of the plot-local origin.
    pub origin: Point,
    /// Plot area size.
    pub plot: Size,
}

impl ChartLayout {
    /// Center of the whole document.
    pub fn view_center(&self) -> Point {
        Point::new(self.view.width * 0.5, self.view.height * 0.5)
    }
}
