// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io;

use chartgarden_table::Dataset;
use csv::WriterBuilder;
use tracing::debug;

use crate::WriteError;

/// Writes the header and every row of `dataset` as CSV.
///
/// Numbers use their shortest round-trip form and nulls become empty cells.
pub fn write_csv<W: io::Write>(dataset: &Dataset, writer: W) -> Result<(), WriteError> {
    let mut wtr = WriterBuilder::new().from_writer(writer);
    wtr.write_record(dataset.columns())?;
    for row in dataset.rows() {
        wtr.write_record(row.iter().map(ToString::to_string))?;
    }
    wtr.flush()?;
    debug!(
        columns = dataset.columns().len(),
        rows = dataset.len(),
        "wrote csv"
    );
    Ok(())
}

/// Serializes `dataset` to CSV bytes.
pub fn to_csv_bytes(dataset: &Dataset) -> Result<Vec<u8>, WriteError> {
    let mut out = Vec::new();
    write_csv(dataset, &mut out)?;
    Ok(out)
}

/// Serializes `dataset` to a CSV string.
pub fn to_csv_string(dataset: &Dataset) -> Result<String, WriteError> {
    Ok(String::from_utf8(to_csv_bytes(dataset)?)?)
}
