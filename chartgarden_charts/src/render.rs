// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry to scene to document.

extern crate alloc;

use alloc::string::String;

use tracing::debug;

use crate::error::RenderError;
use crate::geometry::{ChartGeometry, GeometryBody};
use crate::mark::Scene;
use crate::style::ChartStyle;
use crate::svg;

/// Turns [`ChartGeometry`] into marks and serialized documents using a fixed [`ChartStyle`].
#[derive(Clone, Debug, Default)]
pub struct ChartRenderer {
    style: ChartStyle,
}

impl ChartRenderer {
    /// Creates a renderer with the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the style.
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// The style in use.
    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// Builds the scene for `geometry`.
    pub fn scene(&self, geometry: &ChartGeometry) -> Scene {
        let mut scene = Scene::new(geometry.layout.view, geometry.origin());
        let style = &self.style;
        scene.extend(match &geometry.body {
            GeometryBody::Bars(g) => g.marks(style),
            GeometryBody::Stacked(g) => g.marks(style),
            GeometryBody::Diverging(g) => g.marks(style),
            GeometryBody::Sectors(g) => g.marks(style),
            GeometryBody::Line(g) => g.marks(style),
        });
        scene
    }

    /// Renders a standalone SVG document.
    ///
    /// Returns [`RenderError::NotReady`] when no chart has been built.
    pub fn render_svg(&self, geometry: Option<&ChartGeometry>) -> Result<String, RenderError> {
        let geometry = geometry.ok_or(RenderError::NotReady)?;
        let scene = self.scene(geometry);
        let svg = svg::to_svg_string(&scene)?;
        debug!(
            kind = %geometry.kind,
            marks = scene.marks().len(),
            bytes = svg.len(),
            "rendered svg document"
        );
        Ok(svg)
    }
}

/// Renders `geometry` with the default style.
pub fn render_svg(geometry: Option<&ChartGeometry>) -> Result<String, RenderError> {
    ChartRenderer::new().render_svg(geometry)
}
