// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for chart-generated marks.
//!
//! The scene sorts by `z_index` with insertion order as the tie-break, so marks sharing a layer
//! paint in the order a chart builder pushed them.

/// Gridlines and dashed guides drawn behind series.
pub const GRID_LINES: i32 = -50;

/// Filled series marks (bars, segments, slices).
pub const SERIES_FILL: i32 = 0;
/// Stroked series marks (lines).
pub const SERIES_STROKE: i32 = 10;
/// Point series marks drawn above lines.
pub const SERIES_POINTS: i32 = 20;

/// Axis domain lines and the diverging center line.
pub const AXIS_RULES: i32 = 30;
/// Tick and category labels.
pub const AXIS_LABELS: i32 = 40;
/// Data value labels.
pub const VALUE_LABELS: i32 = 50;

/// Legend frame.
pub const LEGEND_BACKGROUND: i32 = 55;
/// Legend swatches.
pub const LEGEND_SWATCHES: i32 = 60;
/// Legend labels.
pub const LEGEND_LABELS: i32 = 70;
