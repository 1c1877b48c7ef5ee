// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing setup for the `chartgarden` binary.
//!
//! The library crates only emit `tracing` events. Installing a subscriber is left to the
//! binary, or to a host application that prefers its own.

use tracing_subscriber::EnvFilter;

/// Installs a compact stderr subscriber filtered by `RUST_LOG` (default `info`).
///
/// Returns `false` if a global subscriber was already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
