// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout/scale engine entry point.
//!
//! [`ChartGeometry::compute`] turns a dataset and a configuration into every coordinate a
//! renderer needs. It is pure: no marks, no I/O.

use chartgarden_table::Dataset;
use kurbo::{Point, Size};
use tracing::debug;

use crate::bar_chart::BarGeometry;
use crate::config::ChartConfig;
use crate::diverging_bar_chart::DivergingGeometry;
use crate::error::{LayoutError, LayoutResult};
use crate::kind::ChartKind;
use crate::layout::{ChartLayout, ChartLayoutSpec};
use crate::line_chart::LineGeometry;
use crate::sector_chart::SectorGeometry;
use crate::stacked_bar_chart::StackedGeometry;

/// Geometry of one chart, per kind.
#[derive(Clone, Debug, PartialEq)]
pub enum GeometryBody {
    /// Bar and horizontal bar charts.
    Bars(BarGeometry),
    /// Stacked charts with a single cumulative stack per category.
    Stacked(StackedGeometry),
    /// Stacked charts split around a zero line.
    Diverging(DivergingGeometry),
    /// Pie and doughnut charts.
    Sectors(SectorGeometry),
    /// Line charts.
    Line(LineGeometry),
}

/// Fully resolved chart geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartGeometry {
    /// The kind that was laid out.
    pub kind: ChartKind,
    /// Document frame.
    pub layout: ChartLayout,
    /// Per-kind geometry, in plot-local coordinates (sector charts: relative to their center).
    pub body: GeometryBody,
}

impl ChartGeometry {
    /// Computes geometry with the default export layout.
    pub fn compute(
        dataset: &Dataset,
        config: &ChartConfig,
        canvas: impl Into<Size>,
    ) -> LayoutResult<Self> {
        Self::compute_with(dataset, config, canvas, &ChartLayoutSpec::default())
    }

    /// Computes geometry with explicit layout constants.
    pub fn compute_with(
        dataset: &Dataset,
        config: &ChartConfig,
        canvas: impl Into<Size>,
        spec: &ChartLayoutSpec,
    ) -> LayoutResult<Self> {
        if dataset.is_empty() {
            return Err(LayoutError::EmptyDataset);
        }
        require_column(dataset, config.name_key())?;
        let kind = config.kind();
        if !config.is_diverging_stacked() {
            require_column(dataset, config.value_key())?;
        }

        let layout = spec.arrange(canvas);
        debug!(
            %kind,
            rows = dataset.len(),
            width = layout.plot.width,
            height = layout.plot.height,
            "computing chart geometry"
        );

        let body = match kind {
            ChartKind::Bar | ChartKind::HorizontalBar => {
                GeometryBody::Bars(BarGeometry::compute(dataset, config, layout.plot))
            }
            ChartKind::StackedBar | ChartKind::StackedHorizontalBar if config.diverging() => {
                GeometryBody::Diverging(DivergingGeometry::compute(dataset, config, layout.plot))
            }
            ChartKind::StackedBar | ChartKind::StackedHorizontalBar => {
                GeometryBody::Stacked(StackedGeometry::compute(dataset, config, layout.plot))
            }
            ChartKind::Pie | ChartKind::Doughnut => {
                GeometryBody::Sectors(SectorGeometry::compute(dataset, config, &layout))
            }
            ChartKind::Line => {
                GeometryBody::Line(LineGeometry::compute(dataset, config, layout.plot))
            }
        };
        Ok(Self { kind, layout, body })
    }

    /// Document position of the coordinate origin of [`Self::body`].
    pub fn origin(&self) -> Point {
        match &self.body {
            GeometryBody::Sectors(s) => s.center,
            _ => self.layout.origin,
        }
    }

    /// The value the value axis is scaled against: the maximum value, the maximum stack total,
    /// or the pie total.
    pub fn scale_max(&self) -> f64 {
        match &self.body {
            GeometryBody::Bars(b) => b.max_value,
            GeometryBody::Stacked(s) => s.max_total,
            GeometryBody::Diverging(d) => d.max_total,
            GeometryBody::Sectors(s) => s.total,
            GeometryBody::Line(l) => l.max_value,
        }
    }
}

fn require_column(dataset: &Dataset, column: &str) -> LayoutResult<()> {
    if dataset.has_column(column) {
        Ok(())
    } else {
        Err(LayoutError::UnknownColumn(column.into()))
    }
}
