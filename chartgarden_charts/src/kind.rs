// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart kinds.

extern crate alloc;

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// Which axis carries the categories of a cartesian chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Categories run along x; values grow upward.
    Vertical,
    /// Categories run along y; values grow rightward.
    Horizontal,
}

/// The kinds of chart that can be drawn and exported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Vertical single-series bars.
    #[default]
    Bar,
    /// Horizontal single-series bars.
    HorizontalBar,
    /// Vertical stacked (or diverging) bars.
    StackedBar,
    /// Horizontal stacked (or diverging) bars.
    StackedHorizontalBar,
    /// Pie chart.
    Pie,
    /// Pie chart with a hole.
    Doughnut,
    /// Straight-segment line chart with point markers.
    Line,
}

impl ChartKind {
    /// Every kind, in menu order.
    pub const ALL: [Self; 7] = [
        Self::Bar,
        Self::HorizontalBar,
        Self::StackedBar,
        Self::StackedHorizontalBar,
        Self::Pie,
        Self::Doughnut,
        Self::Line,
    ];

    /// The camelCase tag used in settings files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::HorizontalBar => "horizontalBar",
            Self::StackedBar => "stackedBar",
            Self::StackedHorizontalBar => "stackedHorizontalBar",
            Self::Pie => "pie",
            Self::Doughnut => "doughnut",
            Self::Line => "line",
        }
    }

    /// Returns `true` for the two stacked kinds.
    pub fn is_stacked(self) -> bool {
        matches!(self, Self::StackedBar | Self::StackedHorizontalBar)
    }

    /// Returns `true` when categories run along the y axis.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::HorizontalBar | Self::StackedHorizontalBar)
    }

    /// Returns `true` for pie and doughnut charts.
    pub fn is_radial(self) -> bool {
        matches!(self, Self::Pie | Self::Doughnut)
    }

    /// Category-axis orientation. Radial charts report [`Orientation::Vertical`].
    pub fn orientation(self) -> Orientation {
        if self.is_horizontal() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a chart kind tag is not recognized.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown chart type `{0}`")]
pub struct UnknownChartKind(pub String);

impl FromStr for ChartKind {
    type Err = UnknownChartKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownChartKind(String::from(s)))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use super::*;

    #[test]
    fn tags_parse_back_to_the_same_kind() {
        for kind in ChartKind::ALL {
            assert_eq!(kind.to_string().parse::<ChartKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_tags_are_rejected() {
        assert_eq!(
            "scatter".parse::<ChartKind>(),
            Err(UnknownChartKind("scatter".into()))
        );
        assert!("Bar".parse::<ChartKind>().is_err(), "tags are case-sensitive");
    }

    #[test]
    fn classification() {
        assert!(ChartKind::StackedHorizontalBar.is_stacked());
        assert!(ChartKind::StackedHorizontalBar.is_horizontal());
        assert!(ChartKind::Doughnut.is_radial());
        assert_eq!(ChartKind::Line.orientation(), Orientation::Vertical);
        assert_eq!(
            ChartKind::HorizontalBar.orientation(),
            Orientation::Horizontal
        );
    }
}
