// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors produced while loading CSV text.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input has no header row or no data rows.
    #[error("CSV input has no header or no data rows")]
    Empty,
    /// The input is not well-formed CSV.
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors produced while writing CSV.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The CSV encoder failed.
    #[error(transparent)]
    Csv(#[from] csv::Error),
    /// Flushing the output failed.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The output was not valid UTF-8.
    #[error("CSV output is not valid UTF-8")]
    Utf8(#[from] FromUtf8Error),
}
