// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend mark generation.
//!
//! Stacked charts carry a framed legend: one swatch + label row per series, inside a box sized
//! to exactly fit its rows.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use peniko::color::palette::css;
use peniko::{Brush, Color};

use crate::mark::{Mark, StrokeStyle};
use crate::palette::series_color;
use crate::rect_mark::RectMarkSpec;
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// A simple legend row item.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    /// The label string shown next to the swatch.
    pub label: String,
    /// The swatch fill paint.
    pub fill: Brush,
}

impl LegendItem {
    /// Convenience constructor for a solid-color swatch.
    pub fn solid(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            fill: Brush::Solid(color),
        }
    }
}

/// A legend row as computed by the layout engine: label plus palette index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegendEntry {
    /// Row label.
    pub label: String,
    /// Palette index of the swatch.
    pub color_index: usize,
}

impl LegendEntry {
    /// Creates an entry.
    pub fn new(label: impl Into<String>, color_index: usize) -> Self {
        Self {
            label: label.into(),
            color_index,
        }
    }
}

/// Builds the framed legend of a stacked chart, top-right aligned inside the plot area.
pub(crate) fn stacked_legend(entries: &[LegendEntry], plot: Size) -> LegendSwatches {
    let items = entries
        .iter()
        .map(|e| LegendItem::solid(e.label.clone(), series_color(e.color_index)))
        .collect();
    let mut legend = LegendSwatches::new(Point::ZERO, items);
    legend.origin = Point::new(plot.width - legend.width, -plot.height);
    legend
}

/// A framed vertical list of color swatches with text labels.
#[derive(Clone, Debug)]
pub struct LegendSwatches {
    /// Top-left corner of the frame.
    pub origin: Point,
    /// Frame width.
    pub width: f64,
    /// Height of one row.
    pub row_height: f64,
    /// Inset of the first row from the frame's top-left corner.
    pub inset: f64,
    /// Swatch square size.
    pub swatch_size: f64,
    /// Horizontal gap between swatch and label.
    pub label_dx: f64,
    /// Label font size.
    pub font_size: f64,
    /// Label color.
    pub text_fill: Brush,
    /// Frame fill.
    pub frame_fill: Brush,
    /// Frame outline.
    pub frame_stroke: StrokeStyle,
    /// Frame opacity.
    pub frame_opacity: f64,
    /// Items in display order.
    pub items: Vec<LegendItem>,
}

impl LegendSwatches {
    /// Creates a legend with the default frame and row metrics.
    pub fn new(origin: Point, items: Vec<LegendItem>) -> Self {
        Self {
            origin,
            width: 150.0,
            row_height: 20.0,
            inset: 5.0,
            swatch_size: 15.0,
            label_dx: 5.0,
            font_size: 12.0,
            text_fill: Brush::Solid(css::BLACK),
            frame_fill: Brush::Solid(css::WHITE),
            frame_stroke: StrokeStyle::solid(css::BLACK, 0.5),
            frame_opacity: 0.8,
            items,
        }
    }

    /// Frame size: `items * row_height + 2 * inset` tall.
    pub fn size(&self) -> Size {
        Size::new(
            self.width,
            self.items.len() as f64 * self.row_height + 2.0 * self.inset,
        )
    }

    /// Generates the frame followed by a swatch and a label per item.
    pub fn marks(&self) -> Vec<Mark> {
        let mut out = Vec::with_capacity(1 + 2 * self.items.len());
        out.push(
            RectMarkSpec::new(Rect::from_origin_size(self.origin, self.size()))
                .with_fill(self.frame_fill.clone())
                .with_stroke(self.frame_stroke.clone())
                .with_opacity(self.frame_opacity)
                .with_z_index(z_order::LEGEND_BACKGROUND)
                .mark(),
        );
        let Point { x, y } = self.origin;
        for (i, item) in self.items.iter().enumerate() {
            let row_y = y + i as f64 * self.row_height + self.inset;
            out.push(
                RectMarkSpec::new(Rect::from_origin_size(
                    (x + self.inset, row_y),
                    (self.swatch_size, self.swatch_size),
                ))
                .with_fill(item.fill.clone())
                .with_z_index(z_order::LEGEND_SWATCHES)
                .mark(),
            );
            out.push(
                TextMarkSpec::new(
                    Point::new(
                        x + self.inset + self.swatch_size + self.label_dx,
                        row_y + self.font_size,
                    ),
                    item.label.clone(),
                )
                .with_font_size(self.font_size)
                .with_fill(self.text_fill.clone())
                .with_z_index(z_order::LEGEND_LABELS)
                .mark(),
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use crate::mark::MarkPayload;

    use super::*;

    #[test]
    fn frame_fits_its_rows() {
        let legend = LegendSwatches::new(
            Point::new(590.0, -440.0),
            vec![
                LegendItem::solid("a", css::RED),
                LegendItem::solid("b", css::BLUE),
                LegendItem::solid("c", css::GREEN),
            ],
        );
        assert_eq!(legend.size(), Size::new(150.0, 70.0));

        let marks = legend.marks();
        assert_eq!(marks.len(), 7);
        let MarkPayload::Rect(frame) = &marks[0].payload else {
            panic!("expected the frame first");
        };
        assert_eq!(frame.rect, Rect::new(590.0, -440.0, 740.0, -370.0));
        assert_eq!(frame.opacity, 0.8);

        let MarkPayload::Rect(swatch) = &marks[3].payload else {
            panic!("expected a swatch");
        };
        assert_eq!(swatch.rect.origin(), Point::new(595.0, -415.0));
        let label = marks[4].as_text().expect("label follows swatch");
        assert_eq!(label.pos, Point::new(615.0, -403.0));
        assert_eq!(label.text, "b");
    }
}
