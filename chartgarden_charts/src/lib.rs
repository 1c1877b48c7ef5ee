// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart configuration, layout and SVG export for Chartgarden.
//!
//! The crate is split along the export pipeline:
//! - **Configuration**: [`ChartConfig`] says what to draw and keeps its column sets valid
//!   against the loaded [`Dataset`].
//! - **Layout/scale engine**: [`ChartGeometry::compute`] resolves every coordinate (bar
//!   extents, stack offsets, slice angles, ticks, label anchors) without drawing anything.
//! - **Renderer**: [`ChartRenderer`] turns geometry into z-ordered [`Mark`]s collected in a
//!   [`Scene`], and serializes the scene as a standalone SVG document.
//!
//! ```
//! use chartgarden_charts::{ChartConfig, ChartGeometry, ChartKind, Dataset, render_svg};
//! use kurbo::Size;
//!
//! let dataset = Dataset::sample();
//! let config = ChartConfig::new().with_kind(ChartKind::HorizontalBar);
//! let geometry = ChartGeometry::compute(&dataset, &config, Size::new(800.0, 500.0))?;
//! let svg = render_svg(Some(&geometry))?;
//! assert!(svg.contains("Category A"));
//! # Ok::<(), Box<dyn core::error::Error>>(())
//! ```
//!
//! Text shaping is out of scope; text marks store unshaped strings and rely on the viewer's
//! `sans-serif` font.

#![no_std]

extern crate alloc;

mod axis;
mod bar_chart;
#[cfg(test)]
mod chart_tests;
mod config;
mod diverging_bar_chart;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod geometry;
mod kind;
mod layout;
mod legend;
mod line_chart;
mod line_mark;
mod mark;
mod palette;
mod point_mark;
mod rect_mark;
mod render;
mod rule_mark;
mod scale;
mod sector_chart;
mod sector_mark;
mod stacked_bar_chart;
mod style;
mod svg;
mod text_mark;
mod z_order;

pub use axis::{AxisTick, ValueAxis};
pub use bar_chart::{Bar, BarGeometry};
pub use chartgarden_table::{Dataset, Value};
pub use config::ChartConfig;
pub use diverging_bar_chart::{DivergingGeometry, DivergingRow};
pub use error::{LayoutError, LayoutResult, RenderError};
pub use geometry::{ChartGeometry, GeometryBody};
pub use kind::{ChartKind, Orientation, UnknownChartKind};
pub use layout::{CanvasSize, ChartLayout, ChartLayoutSpec, Margins};
pub use legend::{LegendEntry, LegendItem, LegendSwatches};
pub use line_chart::{LineGeometry, LinePoint};
pub use line_mark::LineMarkSpec;
pub use mark::{
    CirclePayload, Mark, MarkPayload, PolylinePayload, RectPayload, RulePayload, Scene,
    SectorPayload, StrokeStyle, TextAnchor, TextBaseline, TextPayload,
};
pub use palette::{GRID_COLOR, LINE_COLOR, PALETTE, series_color};
pub use point_mark::PointMarkSpec;
pub use rect_mark::RectMarkSpec;
pub use render::{ChartRenderer, render_svg};
pub use rule_mark::RuleMarkSpec;
pub use scale::{ScaleBand, ScaleLinear, ScalePoint, TICK_COUNT, Tick, zero_floor_max};
pub use sector_chart::{SectorGeometry, Slice};
pub use sector_mark::SectorMarkSpec;
pub use stacked_bar_chart::{Segment, StackedGeometry, StackedRow};
pub use style::ChartStyle;
pub use svg::{to_svg_string, write_svg};
pub use text_mark::TextMarkSpec;
pub use z_order::*;
