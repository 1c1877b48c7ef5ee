// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scales: zero-based linear value scales, band slots and evenly spaced points.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Number of tick intervals on every value axis (six labels, `0..=5`).
pub const TICK_COUNT: usize = 5;

/// Returns the largest value, floored at zero.
///
/// Empty, all-negative and `NaN` inputs yield `0`.
pub fn zero_floor_max(values: impl IntoIterator<Item = f64>) -> f64 {
    values
        .into_iter()
        .fold(0.0, |acc: f64, v| if v > acc { v } else { acc })
}

/// A tick along a value axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Distance from the zero line along the value axis.
    pub offset: f64,
    /// Label value (rounded to an integer).
    pub value: f64,
}

/// A linear scale from `[0, max]` onto `[0, extent]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    max: f64,
    extent: f64,
}

impl ScaleLinear {
    /// Creates a scale mapping `max` onto `extent`.
    pub fn new(max: f64, extent: f64) -> Self {
        Self { max, extent }
    }

    /// Returns the domain maximum.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns the range extent.
    pub fn extent(&self) -> f64 {
        self.extent
    }

    /// Maps a value to a length. A non-positive maximum maps everything to `0`.
    pub fn map(&self, value: f64) -> f64 {
        if self.max > 0.0 && value.is_finite() {
            value / self.max * self.extent
        } else {
            0.0
        }
    }

    /// Returns the [`TICK_COUNT`] + 1 evenly spaced ticks from `0` to `extent`.
    pub fn ticks(&self) -> Vec<Tick> {
        let n = TICK_COUNT as f64;
        (0..=TICK_COUNT)
            .map(|i| {
                let t = i as f64 / n;
                Tick {
                    offset: t * self.extent,
                    value: (t * self.max).round(),
                }
            })
            .collect()
    }
}

/// Equal slots along a category axis.
///
/// Each slot is `extent / count` long; the band occupies the leading `1 - padding` of it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBand {
    extent: f64,
    count: usize,
    padding: f64,
}

impl ScaleBand {
    /// Creates a band scale with 20% trailing padding per slot.
    pub fn new(extent: f64, count: usize) -> Self {
        Self {
            extent,
            count,
            padding: 0.2,
        }
    }

    /// Sets the trailing padding fraction, clamped to `[0, 1]`.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding.clamp(0.0, 1.0);
        self
    }

    /// Returns the slot length.
    pub fn step(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.extent / self.count as f64
        }
    }

    /// Returns the band thickness.
    pub fn band_width(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Returns the start of slot `index`.
    pub fn x(&self, index: usize) -> f64 {
        self.step() * index as f64
    }

    /// Returns the middle of band `index`.
    pub fn center(&self, index: usize) -> f64 {
        self.x(index) + self.band_width() * 0.5
    }
}

/// Evenly spaced points across an extent, first at `0` and last at `extent`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalePoint {
    extent: f64,
    count: usize,
}

impl ScalePoint {
    /// Creates a point scale.
    pub fn new(extent: f64, count: usize) -> Self {
        Self { extent, count }
    }

    /// Distance between neighbouring points; `0` for fewer than two points.
    pub fn step(&self) -> f64 {
        if self.count <= 1 {
            0.0
        } else {
            self.extent / (self.count - 1) as f64
        }
    }

    /// Returns the position of point `index`.
    pub fn x(&self, index: usize) -> f64 {
        self.step() * index as f64
    }
}
