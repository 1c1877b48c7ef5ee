// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chartgarden_charts::RenderError;
use chartgarden_csv::WriteError;
use thiserror::Error;
use tracing::{info, warn};

use crate::state::{AppState, Notice};

/// MIME type of chart exports.
pub const SVG_MIME: &str = "image/svg+xml;charset=utf-8";

/// MIME type of data exports.
pub const CSV_MIME: &str = "text/csv;charset=utf-8;";

/// What to export.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportKind {
    /// The chart, as a standalone SVG document.
    Svg,
    /// The dataset, as CSV.
    Csv,
}

impl ExportKind {
    /// The suggested file name.
    pub fn filename(self) -> &'static str {
        match self {
            Self::Svg => "chart.svg",
            Self::Csv => "data.csv",
        }
    }
}

/// A finished file, ready to be saved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Export {
    /// File contents.
    pub bytes: Vec<u8>,
    /// MIME type.
    pub mime: &'static str,
    /// Suggested file name.
    pub filename: &'static str,
}

/// Errors produced while building an export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// There is no chart (or no data) to export yet.
    #[error("nothing to export yet; build a chart first")]
    NotReady,
    /// The chart document could not be produced.
    #[error("failed to build the chart document")]
    Render(#[source] RenderError),
    /// The data could not be serialized.
    #[error("failed to write CSV data")]
    Csv(#[from] WriteError),
}

impl From<RenderError> for ExportError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::NotReady => Self::NotReady,
            err => Self::Render(err),
        }
    }
}

/// Where finished exports go.
pub trait ExportSink {
    /// Saves `export`, returning where it ended up.
    fn save(&mut self, export: &Export) -> io::Result<PathBuf>;
}

/// Writes exports into a directory, creating it on first use.
#[derive(Clone, Debug)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Creates a sink targeting `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ExportSink for DirectorySink {
    fn save(&mut self, export: &Export) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(export.filename);
        fs::write(&path, &export.bytes)?;
        Ok(path)
    }
}

/// Keeps exports in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    saved: Vec<Export>,
}

impl MemorySink {
    /// Everything saved so far, oldest first.
    pub fn saved(&self) -> &[Export] {
        &self.saved
    }
}

impl ExportSink for MemorySink {
    fn save(&mut self, export: &Export) -> io::Result<PathBuf> {
        self.saved.push(export.clone());
        Ok(PathBuf::from(export.filename))
    }
}

/// Builds an export from `state` and hands it to `sink`.
///
/// Failures never propagate: they are logged and recorded as an error [`Notice`] on `state`,
/// and `None` is returned. The dataset and the current chart are left untouched either way.
pub fn deliver(
    state: &mut AppState,
    sink: &mut dyn ExportSink,
    kind: ExportKind,
) -> Option<PathBuf> {
    let export = match state.export(kind) {
        Ok(export) => export,
        Err(err) => {
            warn!(?kind, %err, "export failed");
            state.push_notice(Notice::error(format!("Export failed: {err}")));
            return None;
        }
    };
    match sink.save(&export) {
        Ok(path) => {
            info!(?kind, path = %path.display(), bytes = export.bytes.len(), "export saved");
            state.push_notice(Notice::info(format!("Saved {}", path.display())));
            Some(path)
        }
        Err(err) => {
            warn!(?kind, filename = export.filename, %err, "saving export failed");
            state.push_notice(Notice::error(format!(
                "Could not save {}: {err}",
                export.filename
            )));
            None
        }
    }
}
