// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fs;
use std::path::{Path, PathBuf};

use chartgarden_charts::{CanvasSize, ChartKind, UnknownChartKind};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors produced while loading a settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The file could not be read.
    #[error("failed to read settings file {path}")]
    Read {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML, or has unknown keys.
    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),
    /// `chart_type` names no chart kind.
    #[error(transparent)]
    ChartKind(#[from] UnknownChartKind),
    /// The canvas has a non-positive or non-finite side.
    #[error("canvas must be positive, got {width}x{height}")]
    InvalidCanvas {
        /// Configured width.
        width: f64,
        /// Configured height.
        height: f64,
    },
}

/// Defaults for the command-line tool, read from a TOML file.
///
/// Every key is optional:
///
/// ```toml
/// canvas_width = 800
/// canvas_height = 500
/// chart_type = "stackedHorizontalBar"
/// show_data_values = true
/// output_dir = "out"
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Canvas width before export margins.
    pub canvas_width: f64,
    /// Canvas height before export margins.
    pub canvas_height: f64,
    /// Chart kind, by its camelCase name.
    pub chart_type: String,
    /// Draw value labels.
    pub show_data_values: bool,
    /// Where exports are written.
    pub output_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        let canvas = CanvasSize::default();
        Self {
            canvas_width: canvas.width,
            canvas_height: canvas.height,
            chart_type: ChartKind::default().as_str().to_owned(),
            show_data_values: false,
            output_dir: PathBuf::from("."),
        }
    }
}

impl Settings {
    /// Reads and validates a settings file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    /// Parses and validates settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(text)?;
        settings.chart_kind()?;
        let (width, height) = (settings.canvas_width, settings.canvas_height);
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(SettingsError::InvalidCanvas { width, height });
        }
        Ok(settings)
    }

    /// The configured chart kind.
    pub fn chart_kind(&self) -> Result<ChartKind, UnknownChartKind> {
        self.chart_type.parse()
    }

    /// The configured canvas.
    pub fn canvas(&self) -> CanvasSize {
        CanvasSize::new(self.canvas_width, self.canvas_height)
    }
}
