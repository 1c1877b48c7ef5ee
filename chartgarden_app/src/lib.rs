// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The Chartgarden application layer.
//!
//! [`AppState`] owns the loaded dataset, the chart configuration and the last built chart.
//! It changes only through [`AppState::update`], which applies one [`Message`], prunes the
//! configuration and rebuilds the chart. Exports go through an [`ExportSink`]; [`deliver`]
//! turns every export failure into a user-visible [`Notice`] instead of an error that could
//! take the application down.
//!
//! ```
//! use chartgarden_app::{AppState, ExportKind, MemorySink, Message, deliver};
//! use chartgarden_charts::ChartKind;
//!
//! let mut state = AppState::new();
//! state.update(Message::LoadCsv("name,value\nA,10\nB,30\nC,20\n".into()));
//! state.update(Message::SetChartKind(ChartKind::HorizontalBar));
//!
//! let mut sink = MemorySink::default();
//! assert!(deliver(&mut state, &mut sink, ExportKind::Svg).is_some());
//! assert_eq!(sink.saved()[0].filename, "chart.svg");
//! ```

pub mod cli;
mod export;
mod settings;
mod state;
pub mod telemetry;

pub use export::{
    CSV_MIME, DirectorySink, Export, ExportError, ExportKind, ExportSink, MemorySink, SVG_MIME,
    deliver,
};
pub use settings::{Settings, SettingsError};
pub use state::{AppState, MAX_NOTICES, Message, Notice, NoticeLevel};
