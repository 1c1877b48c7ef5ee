// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout and render errors.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

/// Errors produced while computing chart geometry.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// The dataset has no rows.
    #[error("dataset has no rows to chart")]
    EmptyDataset,
    /// A configured column is not part of the dataset header.
    #[error("column `{0}` is not part of the dataset")]
    UnknownColumn(String),
}

/// Errors produced while rendering a chart document.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No chart has been built yet, so there is nothing to export.
    #[error("chart has not been built yet")]
    NotReady,
    /// Writing the document failed.
    #[error("failed to serialize chart document")]
    Serialization(#[from] core::fmt::Error),
}

/// Convenience alias for layout results.
pub type LayoutResult<T> = Result<T, LayoutError>;
