// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tabular data store for Chartgarden.
//!
//! This crate holds the parsed rows a chart is drawn from:
//! - [`Value`] is a single lenient cell (number, text, or null), and
//! - [`Dataset`] is an ordered list of rows aligned to a header.
//!
//! Column typing follows the upload widget: a column is numeric when its cell in the
//! first row is a number. Parsing CSV text into a dataset lives downstream in
//! `chartgarden_csv`.

#![no_std]

extern crate alloc;

mod dataset;
mod value;

pub use dataset::Dataset;
pub use value::Value;
