// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSV in and out of a [`Dataset`].
//!
//! Loading is lenient in the way spreadsheet exports need: the first row is the header, blank
//! lines are skipped, ragged rows are padded, and each cell is typed on its own
//! (see [`type_cell`]). Writing emits the header and every remaining row.

mod error;
mod reader;
mod writer;

pub use chartgarden_table::{Dataset, Value};
pub use error::{ParseError, WriteError};
pub use reader::{parse_reader, parse_str, type_cell};
pub use writer::{to_csv_bytes, to_csv_string, write_csv};
