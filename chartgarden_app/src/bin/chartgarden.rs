// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `chartgarden` command-line tool.

use std::process::ExitCode;

use chartgarden_app::cli::{self, Cli};
use chartgarden_app::telemetry;
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _ = telemetry::init_default_tracing();
    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
