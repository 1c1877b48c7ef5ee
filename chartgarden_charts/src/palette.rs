// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed series colors.

use peniko::Color;

/// Series colors, cycled by index.
pub const PALETTE: [Color; 8] = [
    Color::from_rgb8(0xDF, 0x8E, 0x99),
    Color::from_rgb8(0xE3, 0x91, 0x62),
    Color::from_rgb8(0x83, 0xB1, 0x71),
    Color::from_rgb8(0x53, 0xAF, 0xDC),
    Color::from_rgb8(0x9A, 0x9E, 0xEC),
    Color::from_rgb8(0xC1, 0x98, 0xBD),
    Color::from_rgb8(0x90, 0xA6, 0xCA),
    Color::from_rgb8(0xA5, 0xA5, 0xA5),
];

/// Stroke and marker color for line charts.
pub const LINE_COLOR: Color = Color::from_rgb8(0x88, 0x84, 0xD8);

/// Grid line color.
pub const GRID_COLOR: Color = Color::from_rgb8(0xE0, 0xE0, 0xE0);

/// Returns the palette color for series `index`, wrapping around.
pub fn series_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}
