// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

use chartgarden_charts::{
    CanvasSize, ChartConfig, ChartGeometry, ChartKind, ChartRenderer, LayoutError,
};
use chartgarden_table::Dataset;
use tracing::{debug, info, warn};

use crate::export::{CSV_MIME, Export, ExportError, ExportKind, SVG_MIME};

/// Pending notices kept by [`AppState`]; older ones are dropped first.
pub const MAX_NOTICES: usize = 32;

/// Severity of a [`Notice`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Something finished.
    Info,
    /// An operation failed; the rest of the state is intact.
    Error,
}

/// A message meant for the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Human-readable text.
    pub message: String,
}

impl Notice {
    /// An informational notice.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    /// An error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// Returns `true` for [`NoticeLevel::Error`].
    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// A single user action.
#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    /// Replace the dataset with freshly uploaded CSV text.
    LoadCsv(String),
    /// Pick a chart kind.
    SetChartKind(ChartKind),
    /// Pick the category label column.
    SetNameKey(String),
    /// Pick the primary value column.
    SetValueKey(String),
    /// Replace the extra stacked columns.
    SetStackColumns(Vec<String>),
    /// Toggle diverging stacks.
    SetDiverging(bool),
    /// Replace the left-side columns of a diverging chart.
    SetLeftColumns(Vec<String>),
    /// Replace the right-side columns of a diverging chart.
    SetRightColumns(Vec<String>),
    /// Toggle value labels.
    SetShowDataValues(bool),
    /// Remove one row of the table.
    RemoveRow(usize),
    /// Change the canvas size.
    Resize(CanvasSize),
    /// Restore the form defaults.
    Reset,
}

/// Everything the application knows.
///
/// Geometry is derived: every accepted [`Message`] replaces it wholesale, and a failed rebuild
/// leaves no chart rather than a stale one.
#[derive(Debug)]
pub struct AppState {
    dataset: Dataset,
    config: ChartConfig,
    canvas: CanvasSize,
    renderer: ChartRenderer,
    chart: Option<ChartGeometry>,
    notices: Vec<Notice>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Starts with the sample dataset and a bar chart of it.
    pub fn new() -> Self {
        let dataset = Dataset::sample();
        let mut config = ChartConfig::new();
        config.reset_for(&dataset);
        let mut state = Self::with_parts(dataset, config, CanvasSize::default());
        state.refresh();
        state
    }

    /// Starts with nothing loaded and no chart.
    pub fn blank() -> Self {
        Self::with_parts(Dataset::default(), ChartConfig::new(), CanvasSize::default())
    }

    fn with_parts(dataset: Dataset, config: ChartConfig, canvas: CanvasSize) -> Self {
        Self {
            dataset,
            config,
            canvas,
            renderer: ChartRenderer::new(),
            chart: None,
            notices: Vec::new(),
        }
    }

    /// The current dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The current configuration.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// The current canvas size.
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// The last successfully built chart.
    pub fn chart(&self) -> Option<&ChartGeometry> {
        self.chart.as_ref()
    }

    /// Pending notices, oldest first. At most [`MAX_NOTICES`] are kept.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Drains pending notices.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Records a notice for the user, dropping the oldest one when [`MAX_NOTICES`] are pending.
    pub fn push_notice(&mut self, notice: Notice) {
        if self.notices.len() >= MAX_NOTICES {
            let excess = self.notices.len() + 1 - MAX_NOTICES;
            debug!(dropped = excess, "notice queue full");
            self.notices.drain(..excess);
        }
        self.notices.push(notice);
    }

    /// Applies one message, then prunes the configuration and rebuilds the chart.
    pub fn update(&mut self, message: Message) {
        debug!(?message, "update");
        match message {
            Message::LoadCsv(text) => match chartgarden_csv::parse_str(&text) {
                Ok(dataset) => {
                    info!(
                        rows = dataset.len(),
                        columns = dataset.columns().len(),
                        "loaded dataset"
                    );
                    self.config.reset_for(&dataset);
                    self.dataset = dataset;
                }
                Err(err) => {
                    warn!(%err, "rejected csv upload");
                    self.push_notice(Notice::error(format!("Could not read CSV: {err}")));
                    return;
                }
            },
            Message::SetChartKind(kind) => self.config.set_kind(kind),
            Message::SetNameKey(key) => self.config.set_name_key(&self.dataset, key),
            Message::SetValueKey(key) => self.config.set_value_key(&self.dataset, key),
            Message::SetStackColumns(columns) => {
                self.config.set_stack_columns(&self.dataset, columns);
            }
            Message::SetDiverging(on) => self.config.set_diverging(on),
            Message::SetLeftColumns(columns) => {
                self.config.set_left_columns(&self.dataset, columns);
            }
            Message::SetRightColumns(columns) => {
                self.config.set_right_columns(&self.dataset, columns);
            }
            Message::SetShowDataValues(on) => self.config.set_show_data_values(on),
            Message::RemoveRow(index) => {
                if self.dataset.remove_row(index).is_none() {
                    debug!(index, rows = self.dataset.len(), "row index out of range");
                    return;
                }
                // Column typing follows the first row, which may just have changed.
                self.config.prune(&self.dataset);
            }
            Message::Resize(canvas) => self.canvas = canvas,
            Message::Reset => self.config.reset_form(),
        }
        self.refresh();
    }

    /// Rebuilds the chart from the current dataset, configuration and canvas.
    ///
    /// On failure the previous chart is dropped.
    pub fn rebuild(&mut self) -> Result<&ChartGeometry, LayoutError> {
        self.chart = None;
        let geometry = ChartGeometry::compute(&self.dataset, &self.config, self.canvas)?;
        Ok(&*self.chart.insert(geometry))
    }

    fn refresh(&mut self) {
        if let Err(err) = self.rebuild().map(|_| ()) {
            warn!(%err, "chart could not be built");
            self.push_notice(Notice::error(format!("Chart could not be built: {err}")));
        }
    }

    /// Produces an export of the chart or of the data.
    pub fn export(&self, kind: ExportKind) -> Result<Export, ExportError> {
        match kind {
            ExportKind::Svg => self.export_svg(),
            ExportKind::Csv => self.export_csv(),
        }
    }

    /// Serializes the current chart as a standalone SVG document.
    ///
    /// Returns [`ExportError::NotReady`] when no chart has been built.
    pub fn export_svg(&self) -> Result<Export, ExportError> {
        let svg = self.renderer.render_svg(self.chart.as_ref())?;
        Ok(Export {
            bytes: svg.into_bytes(),
            mime: SVG_MIME,
            filename: ExportKind::Svg.filename(),
        })
    }

    /// Serializes the current dataset, reflecting removed rows.
    ///
    /// Returns [`ExportError::NotReady`] when no dataset has been loaded.
    pub fn export_csv(&self) -> Result<Export, ExportError> {
        if self.dataset.columns().is_empty() {
            return Err(ExportError::NotReady);
        }
        Ok(Export {
            bytes: chartgarden_csv::to_csv_bytes(&self.dataset)?,
            mime: CSV_MIME,
            filename: ExportKind::Csv.filename(),
        })
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
